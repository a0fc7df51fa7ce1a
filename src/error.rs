extern crate thiserror;

use std::io;

use gdlemma::error::TableError;
use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("{0}")]
    Table(#[from] TableError),

    #[error("Worker Error: {0}")]
    Worker(String),
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("File I/O Error: {path}: {kind}")]
    File { path: String, kind: io::ErrorKind },

    #[error("Serialization Error: {0}")]
    Serialization(String),
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {path}: {kind}")]
    File { path: String, kind: io::ErrorKind },

    #[error("Writer Error: {0}")]
    Writer(io::ErrorKind),
}
