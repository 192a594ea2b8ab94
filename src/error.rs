
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything which can go wrong while setting up or running a demo.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not create window: {0}")]
    Window(String),

    #[error("Shader compilation failed:\n{0}")]
    Shader(String),
    #[error("Shader linking failed:\n{0}")]
    Link(String),

    #[error("I/O error on {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("Invalid png image: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("Could not write png image: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("Unsupported image: {0}")]
    Image(String),

    #[error("Invalid config file {path}: {source}")]
    Config { path: PathBuf, source: toml::de::Error },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_name_the_path() {
        let err = Error::io("shots/ccube-1.png", io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!("I/O error on shots/ccube-1.png: denied", err.to_string());
    }
}
