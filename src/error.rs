//! Error type for packing trees into binary artifacts.
//!
//! All fallible operations of this crate return [PackError]. Missing node
//! names or branch lengths are not errors; they are replaced by defaults
//! when records are written.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while packing a tree or reading artifacts back.
#[derive(Debug, Error)]
pub enum PackError {
    /// Topology bit-vector contains a value other than 0 or 1.
    #[error("Invalid topology bit {value} at position {position} - expected 0 or 1")]
    InvalidBit { position: usize, value: u8 },

    /// Chunk size outside of `1..=64`.
    #[error("Invalid chunk size {0} - must be between 1 and 64 bits")]
    InvalidChunkSize(usize),

    /// Output file already exists and would be overwritten.
    #[error("Output file already exists: {}", .0.display())]
    OutputExists(PathBuf),

    /// Packed topology words that do not describe a bit-vector of the given length.
    #[error("Malformed packed topology - {0}")]
    MalformedTopology(String),

    /// Binary artifact whose length is not a multiple of its 8-byte word size.
    #[error("Truncated {artifact} artifact - {len} bytes is not a multiple of 8")]
    TruncatedArtifact { artifact: &'static str, len: usize },

    /// Underlying reader or writer failed.
    #[error("IO error - {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_bit() {
        let err = PackError::InvalidBit { position: 7, value: 2 };
        assert_eq!(
            err.to_string(),
            "Invalid topology bit 2 at position 7 - expected 0 or 1"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let err: PackError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, PackError::Io(_)));
        assert_eq!(err.to_string(), "IO error - pipe closed");
    }
}
