use std::fs;
use std::path::Path;

use log::debug;

use crate::carray::error::ConvertError;

/// Load the whole image at the given path into memory, in file order.
pub fn read_image(path: &Path) -> Result<Vec<u8>, ConvertError> {
    let data = fs::read(path).map_err(|err| ConvertError::read(path, err))?;

    debug!("Read {} byte(s) from {}", data.len(), path.display());

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn reads_bytes_in_file_order() {
        let mut image = NamedTempFile::new().unwrap();
        let bytes: Vec<u8> = (0..=255u8).rev().collect();
        image.write_all(&bytes).unwrap();

        let data = read_image(image.path()).unwrap();

        assert_eq!(data, bytes);
    }

    #[test]
    fn reads_empty_file() {
        let image = NamedTempFile::new().unwrap();

        let data = read_image(image.path()).unwrap();

        assert!(data.is_empty());
    }

    #[test]
    fn missing_file_is_read_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.bin");

        let err = read_image(&path).unwrap_err();

        assert!(matches!(err, ConvertError::Read { .. }));
        assert!(err.to_string().contains("does-not-exist.bin"));
    }
}
