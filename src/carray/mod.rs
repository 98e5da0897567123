//! Conversion of a raw image into a C `unsigned char` array.

pub mod config;
pub mod error;
pub mod literal;
pub mod reader;
pub mod writer;

use std::path::Path;

use config::ArrayConfig;
use error::ConvertError;
use reader::read_image;
use writer::{write_c_array, ArraySummary};

/// Read the image at `input` and write it out as a C array.
pub fn convert(input: &Path, config: &ArrayConfig) -> Result<ArraySummary, ConvertError> {
    let data = read_image(input)?;
    write_c_array(config, &data)
}
