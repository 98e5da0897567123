use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use itertools::Itertools;
use log::debug;

use crate::carray::config::ArrayConfig;
use crate::carray::error::ConvertError;
use crate::carray::literal::hex_literals;

// Identifier of the emitted array. The bootloader links against this name.
const ARRAY_NAME: &str = "array";

// Prefix of every initializer line.
const INDENT: &str = "    ";

/// What was written by [`write_c_array`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArraySummary {
    pub path: PathBuf,
    pub byte_count: usize,
    pub line_count: usize,
}

/// Number of initializer lines needed for `len` bytes.
pub fn body_line_count(len: usize, bytes_per_line: NonZeroUsize) -> usize {
    len.div_ceil(bytes_per_line.get())
}

/// Render the array declaration for `data` into the given writer.
///
/// Every initializer line but the last ends with a comma. An empty image
/// produces a zero length declaration with no initializer lines.
pub fn render_c_array<W: Write>(
    out: &mut W,
    data: &[u8],
    bytes_per_line: NonZeroUsize,
) -> io::Result<()> {
    writeln!(out, "unsigned char {ARRAY_NAME}[{}] = {{", data.len())?;

    let line_count = body_line_count(data.len(), bytes_per_line);
    for (index, chunk) in data.chunks(bytes_per_line.get()).enumerate() {
        let terminator = if index + 1 < line_count { "," } else { "" };
        writeln!(
            out,
            "{INDENT}{}{terminator}",
            hex_literals(chunk).format(", ")
        )?;
    }

    writeln!(out, "}};")
}

/// Write `data` as a C array to `<output_base_name>.c`, replacing any existing file.
pub fn write_c_array(config: &ArrayConfig, data: &[u8]) -> Result<ArraySummary, ConvertError> {
    let path = config.output_path();

    let file = File::create(&path).map_err(|err| ConvertError::write(&path, err))?;
    let mut output = BufWriter::new(file);

    // BufWriter ignores flush errors on drop
    render_c_array(&mut output, data, config.bytes_per_line)
        .and_then(|_| output.flush())
        .map_err(|err| ConvertError::write(&path, err))?;

    let summary = ArraySummary {
        line_count: body_line_count(data.len(), config.bytes_per_line),
        byte_count: data.len(),
        path,
    };
    debug!(
        "Wrote {} initializer line(s) to {}",
        summary.line_count,
        summary.path.display()
    );

    Ok(summary)
}
