use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default wrap width of the array initializer.
pub const DEFAULT_BYTES_PER_LINE: NonZeroUsize = match NonZeroUsize::new(32) {
    Some(width) => width,
    None => unreachable!(),
};

/// Default base name of the emitted C file.
pub const DEFAULT_OUTPUT_BASE_NAME: &str = "imageArray";

/// How to emit the C array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Name of the emitted file, without the `.c` extension.
    pub output_base_name: String,
    /// Maximum number of literals on one initializer line.
    pub bytes_per_line: NonZeroUsize,
}

impl ArrayConfig {
    pub fn new(output_base_name: impl Into<String>, bytes_per_line: NonZeroUsize) -> Self {
        Self {
            output_base_name: output_base_name.into(),
            bytes_per_line,
        }
    }

    /// The path of the emitted file.
    ///
    /// `.c` is appended, never substituted, so `image.v2` becomes `image.v2.c`.
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.c", self.output_base_name))
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_BASE_NAME, DEFAULT_BYTES_PER_LINE)
    }
}
