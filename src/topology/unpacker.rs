//! Reconstruction of topology bits from packed words.

use crate::error::PackError;
use crate::topology::defs::ChunkSize;

/// Unpacks words produced by [pack_topology](crate::topology::pack_topology)
/// back into the original topology bits.
///
/// Packed words do not record the total number of bits, so it has to be
/// provided (e.g. `2 * num_nodes` for a balanced-parenthesis sequence).
///
/// # Arguments
/// * `words` - Packed topology words
/// * `bit_len` - Number of bits originally packed
/// * `chunk_size` - Chunk size used when packing
///
/// # Errors
/// Returns [PackError::MalformedTopology] if
/// - a non-zero word is wider than its group,
/// - an all-zero group is interrupted by a non-zero word,
/// - the words run out before `bit_len` bits are reconstructed, or
/// - words are left over afterwards.
pub fn unpack_topology(
    words: &[u64],
    bit_len: usize,
    chunk_size: ChunkSize,
) -> Result<Vec<u8>, PackError> {
    // Each word covers at most one chunk
    let coverable = words.len().saturating_mul(chunk_size.get());
    let mut bits = Vec::with_capacity(bit_len.min(coverable));
    let mut words = words.iter().copied();

    while bits.len() < bit_len {
        let group_len = chunk_size.get().min(bit_len - bits.len());
        let first = words.next().ok_or_else(|| out_of_words(bits.len(), bit_len))?;

        if first == 0 {
            bits.push(0);
            for _ in 1..group_len {
                match words.next() {
                    Some(0) => bits.push(0),
                    Some(word) => {
                        return Err(PackError::MalformedTopology(format!(
                            "word {word} interrupts all-zero group at bit {}",
                            bits.len()
                        )));
                    }
                    None => return Err(out_of_words(bits.len(), bit_len)),
                }
            }
        } else {
            let width = (u64::BITS - first.leading_zeros()) as usize;
            if width > group_len {
                return Err(PackError::MalformedTopology(format!(
                    "word {first} needs {width} bits but group at bit {} has {group_len}",
                    bits.len()
                )));
            }
            bits.extend((0..group_len).rev().map(|shift| ((first >> shift) & 1) as u8));
        }
    }

    let leftover = words.count();
    if leftover > 0 {
        return Err(PackError::MalformedTopology(format!(
            "{leftover} words left after {bit_len} bits"
        )));
    }

    Ok(bits)
}

fn out_of_words(unpacked: usize, bit_len: usize) -> PackError {
    PackError::MalformedTopology(format!("ran out of words after {unpacked} of {bit_len} bits"))
}
