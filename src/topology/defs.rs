//! Constants and the [ChunkSize] setting for topology packing.

use crate::error::PackError;

/// Default number of bits folded into one packed word.
///
/// Words of at most 51 bits stay exactly representable as IEEE-754 doubles.
pub const DEFAULT_CHUNK_SIZE: usize = 51;

/// Largest chunk size, since a packed group has to fit into a `u64`.
pub const MAX_CHUNK_SIZE: usize = u64::BITS as usize;

/// Number of consecutive topology bits packed into one word.
///
/// # Invariants
/// - Always within `1..=MAX_CHUNK_SIZE` (enforced by [ChunkSize::new])
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkSize(usize);

impl ChunkSize {
    /// Creates a chunk size of `bits` bits.
    ///
    /// # Errors
    /// Returns [PackError::InvalidChunkSize] if `bits` is zero or
    /// larger than [MAX_CHUNK_SIZE].
    pub fn new(bits: usize) -> Result<Self, PackError> {
        if bits == 0 || bits > MAX_CHUNK_SIZE {
            return Err(PackError::InvalidChunkSize(bits));
        }
        Ok(ChunkSize(bits))
    }

    /// Returns the number of bits per chunk.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for ChunkSize {
    fn default() -> Self {
        ChunkSize(DEFAULT_CHUNK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_51() {
        assert_eq!(ChunkSize::default().get(), 51);
    }

    #[test]
    fn test_bounds() {
        assert!(ChunkSize::new(1).is_ok());
        assert!(ChunkSize::new(64).is_ok());
        assert!(matches!(ChunkSize::new(0), Err(PackError::InvalidChunkSize(0))));
        assert!(matches!(ChunkSize::new(65), Err(PackError::InvalidChunkSize(65))));
    }
}
