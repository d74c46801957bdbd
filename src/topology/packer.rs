//! Packing of balanced-parenthesis bits into fixed-width words.

use crate::error::PackError;
use crate::topology::defs::ChunkSize;
use std::iter;
use tracing::debug;

/// Scan state while reading a single group, reset for every group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupState {
    /// No 1-bit seen yet; zeros are only counted.
    ScanningLeadingZeros,
    /// A 1-bit was seen; every further bit is shifted into the value.
    Accumulating,
}

/// Packs a topology bit-vector into a sequence of words.
///
/// The bits are split into consecutive groups of `chunk_size` bits (the last
/// group may be shorter). Each group becomes either
/// - a single non-zero word holding the group's bits read as a big-endian
///   binary number (its leading zeros are implied by the group width), or
/// - if the group is all zeros, one `0` word per bit of the group.
///
/// Groups are packed independently of each other.
///
/// # Arguments
/// * `bits` - Topology bits, each of which must be `0` or `1`
/// * `chunk_size` - Maximal number of bits folded into one word
///
/// # Errors
/// Returns [PackError::InvalidBit] for the first value other than 0 or 1;
/// nothing is packed in that case.
///
/// # Example
/// ```
/// use phylopack::topology::{ChunkSize, pack_topology};
///
/// let words = pack_topology(&[1, 0, 0, 0, 0, 1], ChunkSize::new(3).unwrap()).unwrap();
/// assert_eq!(words, vec![4, 1]);
/// ```
pub fn pack_topology(bits: &[u8], chunk_size: ChunkSize) -> Result<Vec<u64>, PackError> {
    validate_bits(bits)?;

    let mut words = Vec::with_capacity(bits.len().div_ceil(chunk_size.get()));
    for group in bits.chunks(chunk_size.get()) {
        pack_group(group, &mut words);
    }

    debug!(
        bits = bits.len(),
        words = words.len(),
        chunk_size = chunk_size.get(),
        "packed topology"
    );
    Ok(words)
}

/// Checks that every element of `bits` is 0 or 1.
fn validate_bits(bits: &[u8]) -> Result<(), PackError> {
    match bits.iter().position(|&bit| bit > 1) {
        Some(position) => Err(PackError::InvalidBit { position, value: bits[position] }),
        None => Ok(()),
    }
}

fn pack_group(group: &[u8], words: &mut Vec<u64>) {
    let mut state = GroupState::ScanningLeadingZeros;
    let mut pending_zeros = 0;
    let mut value: u64 = 0;

    for &bit in group {
        match state {
            GroupState::ScanningLeadingZeros if bit == 0 => pending_zeros += 1,
            GroupState::ScanningLeadingZeros => {
                state = GroupState::Accumulating;
                value = 1;
            }
            GroupState::Accumulating => value = (value << 1) | u64::from(bit),
        }
    }

    match state {
        GroupState::ScanningLeadingZeros => words.extend(iter::repeat_n(0, pending_zeros)),
        GroupState::Accumulating => words.push(value),
    }
}
