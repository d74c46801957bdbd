//! Reading and writing the fixed-width binary artifacts.
//!
//! Both the lengths and the topology artifact are headerless sequences of
//! 8-byte big-endian words:
//! - lengths: IEEE-754 doubles, one per node in postorder,
//! - topology: unsigned 64-bit packed topology words.
//!
//! The labels artifact has no word structure and is written directly by
//! [write_records](crate::records::write_records).

use crate::error::PackError;
use std::io::{Read, Write};

/// Size in bytes of one word in the lengths and topology artifacts.
pub const WORD_BYTES: usize = 8;

/// Writes packed topology words as 8-byte big-endian unsigned integers.
///
/// # Errors
/// Returns [PackError::Io] if writing fails.
pub fn write_topology_words<W: Write + ?Sized>(
    words: &[u64],
    sink: &mut W,
) -> Result<(), PackError> {
    for word in words {
        sink.write_all(&word.to_be_bytes())?;
    }
    Ok(())
}

/// Reads a topology artifact back into its packed words.
///
/// # Errors
/// Returns [PackError::TruncatedArtifact] if the artifact's length is not a
/// multiple of [WORD_BYTES], or [PackError::Io] if reading fails.
pub fn read_topology_words<R: Read>(source: &mut R) -> Result<Vec<u64>, PackError> {
    read_words(source, "topology", u64::from_be_bytes)
}

/// Reads a lengths artifact back into branch lengths (postorder).
///
/// # Errors
/// Returns [PackError::TruncatedArtifact] if the artifact's length is not a
/// multiple of [WORD_BYTES], or [PackError::Io] if reading fails.
pub fn read_lengths<R: Read>(source: &mut R) -> Result<Vec<f64>, PackError> {
    read_words(source, "lengths", f64::from_be_bytes)
}

fn read_words<R: Read, T>(
    source: &mut R,
    artifact: &'static str,
    decode: fn([u8; WORD_BYTES]) -> T,
) -> Result<Vec<T>, PackError> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;

    let chunks = bytes.chunks_exact(WORD_BYTES);
    if !chunks.remainder().is_empty() {
        return Err(PackError::TruncatedArtifact { artifact, len: bytes.len() });
    }

    Ok(chunks
        .map(|chunk| {
            let mut word = [0u8; WORD_BYTES];
            word.copy_from_slice(chunk);
            decode(word)
        })
        .collect())
}
