use std::io;
use std::path::{Path, PathBuf};

use derive_more::derive::{Display, Error};

/// A fatal failure while converting an image into a C array.
///
/// The underlying I/O error is exposed as the error source, not in the message.
#[derive(Debug, Display, Error)]
pub enum ConvertError {
    /// The source image is missing or could not be read.
    #[display("failed to read image {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    /// The destination file could not be created or written.
    #[display("failed to write array to {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl ConvertError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn io_message_appears_once_in_chain() {
        let cases = [
            ConvertError::read(Path::new("nope.bin"), io::ErrorKind::NotFound.into()),
            ConvertError::write(
                Path::new("/nonexist/x.c"),
                io::ErrorKind::PermissionDenied.into(),
            ),
        ];

        for err in cases {
            let os_message = err.source().unwrap().to_string();
            assert!(!err.to_string().contains(&os_message));

            let chain = format!("{:#}", anyhow::Error::from(err));
            assert_eq!(chain.matches(&os_message).count(), 1, "{chain}");
        }
    }

    #[test]
    fn message_names_path() {
        let err = ConvertError::read(Path::new("fw/Application.bin"), io::ErrorKind::NotFound.into());
        assert_eq!(err.to_string(), "failed to read image fw/Application.bin");

        let err = ConvertError::write(Path::new("imageArray.c"), io::ErrorKind::Other.into());
        assert_eq!(err.to_string(), "failed to write array to imageArray.c");
    }

    #[cfg(unix)]
    #[test]
    fn keeps_non_utf8_path() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"image\xff.bin"));
        match ConvertError::read(path, io::ErrorKind::NotFound.into()) {
            ConvertError::Read { path: kept, .. } => assert_eq!(kept, path),
            other => panic!("unexpected error {other}"),
        }
    }
}
