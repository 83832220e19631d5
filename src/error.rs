use std::fmt;
use std::io;

/// Errors surfaced by the pipeline and its I/O helpers.
#[derive(Debug)]
pub enum Error {
    /// Zero-sized input, or a buffer/mask dimension mismatch.
    InvalidDimensions(String),
    Io(io::Error),
    /// Image decode/encode failure in the file helpers.
    Codec(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimensions(msg) => write!(f, "invalid dimensions: {}", msg),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Codec(msg) => write!(f, "codec error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Codec(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
