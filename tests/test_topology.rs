use phylopack::PackError;
use phylopack::pack_topology_default;
use phylopack::topology::{ChunkSize, pack_topology, unpack_topology};
use proptest::prelude::*;

fn chunk(bits: usize) -> ChunkSize {
    ChunkSize::new(bits).unwrap()
}

/// Number of bits each packed word stands for: 1 for a zero word,
/// the width of its group for a non-zero word.
fn encoded_widths(words: &[u64], bit_len: usize, chunk_size: ChunkSize) -> Vec<usize> {
    let mut widths = Vec::with_capacity(words.len());
    let mut position = 0;
    for &word in words {
        let group_len = chunk_size.get().min(bit_len - position);
        let width = if word == 0 { 1 } else { group_len };
        widths.push(width);
        position += width;
    }
    widths
}

// ============= Regression cases =============

#[test]
fn test_chunk_boundary_regression() {
    assert_eq!(pack_topology(&[1, 0, 0, 0, 0, 1], chunk(3)).unwrap(), vec![4, 1]);
}

#[test]
fn test_empty_input() {
    assert_eq!(pack_topology_default(&[]).unwrap(), Vec::<u64>::new());
    assert_eq!(pack_topology(&[], chunk(1)).unwrap(), Vec::<u64>::new());
}

#[test]
fn test_default_chunk_packs_small_tree_into_one_word() {
    assert_eq!(pack_topology_default(&[1, 1, 0, 0, 1, 0]).unwrap(), vec![0b110010]);
}

#[test]
fn test_multiple_default_chunks() {
    // 51 ones, then a group "0...01" of 51 bits, then a short group "10"
    let mut bits = vec![1u8; 51];
    bits.extend(std::iter::repeat_n(0, 50));
    bits.push(1);
    bits.extend([1, 0]);

    let words = pack_topology_default(&bits).unwrap();
    assert_eq!(words, vec![(1u64 << 51) - 1, 1, 2]);
}

#[test]
fn test_chunk_size_one() {
    assert_eq!(pack_topology(&[1, 0, 1, 1, 0], chunk(1)).unwrap(), vec![1, 0, 1, 1, 0]);
}

#[test]
fn test_invalid_bit_fails() {
    match pack_topology_default(&[1, 1, 0, 3, 0, 0]) {
        Err(PackError::InvalidBit { position, value }) => {
            assert_eq!(position, 3);
            assert_eq!(value, 3);
        }
        other => panic!("expected InvalidBit, got {other:?}"),
    }
}

// ============= Properties =============

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_encoded_widths_cover_input(
        bits in proptest::collection::vec(0u8..=1, 0..400),
        chunk_bits in 1usize..=64,
    ) {
        let chunk_size = chunk(chunk_bits);
        let words = pack_topology(&bits, chunk_size).unwrap();
        let widths = encoded_widths(&words, bits.len(), chunk_size);
        prop_assert_eq!(widths.iter().sum::<usize>(), bits.len());
    }

    #[test]
    fn prop_words_fit_chunk(
        bits in proptest::collection::vec(0u8..=1, 0..400),
        chunk_bits in 1usize..=64,
    ) {
        let words = pack_topology(&bits, chunk(chunk_bits)).unwrap();
        for word in words {
            prop_assert!(u64::BITS - word.leading_zeros() <= chunk_bits as u32);
        }
    }

    #[test]
    fn prop_all_zero_input_gives_zero_words(
        len in 0usize..300,
        chunk_bits in 1usize..=64,
    ) {
        let words = pack_topology(&vec![0u8; len], chunk(chunk_bits)).unwrap();
        prop_assert_eq!(words, vec![0u64; len]);
    }

    #[test]
    fn prop_unpack_restores_bits(
        bits in proptest::collection::vec(0u8..=1, 0..400),
        chunk_bits in 1usize..=64,
    ) {
        let chunk_size = chunk(chunk_bits);
        let words = pack_topology(&bits, chunk_size).unwrap();
        prop_assert_eq!(unpack_topology(&words, bits.len(), chunk_size).unwrap(), bits);
    }

    #[test]
    fn prop_invalid_value_is_rejected(
        mut bits in proptest::collection::vec(0u8..=1, 1..200),
        bad in 2u8..=u8::MAX,
        at in any::<proptest::sample::Index>(),
    ) {
        let position = at.index(bits.len());
        bits[position] = bad;
        let is_invalid_bit = matches!(
            pack_topology_default(&bits),
            Err(PackError::InvalidBit { position: p, value }) if p == position && value == bad
        );
        prop_assert!(is_invalid_bit);
    }
}
