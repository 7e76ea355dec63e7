//! Error types for line index operations

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Line {line} out of range: file has {total} lines")]
    OutOfRange { line: u64, total: u64 },

    #[error("Read beyond file bounds: offset={offset}, length={length}, size={size}")]
    OutOfBounds { offset: u64, length: u64, size: u64 },
}

pub type Result<T> = std::result::Result<T, IndexError>;
