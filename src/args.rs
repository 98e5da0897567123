use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::carray::config::{ArrayConfig, DEFAULT_BYTES_PER_LINE, DEFAULT_OUTPUT_BASE_NAME};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Arguments {
    /// Binary image to embed
    #[arg(value_name = "PATH", default_value = "Application.bin")]
    input: PathBuf,

    /// Output base name, `.c` is appended
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_OUTPUT_BASE_NAME)]
    output: String,

    /// Number of bytes per array line
    #[arg(short, long, value_name = "BYTES", default_value_t = DEFAULT_BYTES_PER_LINE)]
    width: NonZeroUsize,
}

/// CLI argument handler.
pub struct ArgHandler {
    data: Arguments,
}

impl ArgHandler {
    pub fn parse() -> ArgHandler {
        ArgHandler {
            data: Arguments::parse(),
        }
    }

    /// Get the input image path.
    pub fn input(&self) -> &Path {
        &self.data.input
    }

    /// Get the output base name.
    pub fn output(&self) -> &str {
        self.data.output.as_str()
    }

    /// Get the number of bytes per line.
    pub fn width(&self) -> NonZeroUsize {
        self.data.width
    }

    /// Build the array configuration from the arguments.
    pub fn config(&self) -> ArrayConfig {
        ArrayConfig::new(self.output(), self.width())
    }
}
