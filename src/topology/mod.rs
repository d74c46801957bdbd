//! Packing of tree topology bit-vectors into fixed-width words.
//!
//! A tree's shape is given as a balanced-parenthesis sequence of bits
//! (`1` = open, `0` = close). [pack_topology] folds this sequence into `u64`
//! words, each covering up to [ChunkSize] consecutive bits:
//!
//! | Group content | Output |
//! |---------------|--------|
//! | contains a `1` | one word, the group read as a binary number |
//! | only `0`s | one `0` word per bit of the group |
//!
//! A zero word therefore always stands for a single zero bit, while a
//! non-zero word stands for a whole group with its leading zeros implied.
//! Given the original bit length, [unpack_topology] reverses the packing.
//!
//! # Example
//! ```
//! use phylopack::topology::{ChunkSize, pack_topology, unpack_topology};
//!
//! let chunk_size = ChunkSize::new(3)?;
//! let words = pack_topology(&[0, 0, 0, 1, 1, 0], chunk_size)?;
//! assert_eq!(words, vec![0, 0, 0, 6]);
//! assert_eq!(unpack_topology(&words, 6, chunk_size)?, vec![0, 0, 0, 1, 1, 0]);
//! # Ok::<(), phylopack::PackError>(())
//! ```

mod defs;
mod packer;
mod unpacker;

pub use self::defs::{ChunkSize, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use self::packer::pack_topology;
pub use self::unpacker::unpack_topology;
