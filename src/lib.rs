//! Phylopack is a library to pack phylogenetic trees into compact binary
//! artifacts that viewers can load without parsing Newick text.
//!
//! A tree, given by its balanced-parenthesis topology plus optional label and
//! branch length per node, is turned into three headerless artifacts:
//! - Lengths: one 8-byte big-endian `f64` per node, in postorder
//!   (missing lengths written as `0.0`).
//! - Labels: the UTF-8 labels of all nodes in postorder, concatenated without
//!   delimiters (missing labels contribute nothing).
//! - Topology: the topology bits packed into 8-byte big-endian `u64` words,
//!   see [topology] for the packing scheme.
//!
//! Core functionality provided:
//! - [topology]: [pack_topology](topology::pack_topology) and its inverse
//!   [unpack_topology](topology::unpack_topology), with configurable
//!   [ChunkSize](topology::ChunkSize) (default 51 bits).
//! - [records]: writing lengths and labels of all nodes.
//! - [Converter]: drives both over a tree and writes to sinks or new files.
//! - [model]: the [TopologyTree](model::TopologyTree) trait, through which
//!   any tree representation can be packed, and the in-memory
//!   [PostorderTree](model::PostorderTree).
//!
//! Limitations:
//! - No parsing of Newick or Nexus input; bring your own tree.
//! - Topology bits are checked to be 0 or 1, but not for balance.
//!
//! # Example
//! ```
//! use phylopack::Converter;
//! use phylopack::model::PostorderTree;
//!
//! // ((A,B)); as balanced parentheses, nodes in postorder: A, B, (A,B)
//! let mut tree = PostorderTree::new(3).with_topology_bits(vec![1, 1, 0, 1, 0, 0]);
//! tree.add_node(Some("A".to_string()), Some(0.1));
//! tree.add_node(Some("B".to_string()), Some(0.2));
//! tree.add_node(None, None);
//!
//! let (mut lengths, mut labels, mut topology) =
//!     (Vec::<u8>::new(), Vec::<u8>::new(), Vec::<u8>::new());
//! let summary = Converter::default().convert(&tree, &mut lengths, &mut labels, &mut topology)?;
//!
//! assert_eq!(summary.nodes, 3);
//! assert_eq!(labels, b"AB");
//! assert_eq!(topology, 0b110100u64.to_be_bytes());
//! # Ok::<(), phylopack::PackError>(())
//! ```

pub mod artifact;
pub mod convert;
pub mod error;
pub mod model;
pub mod records;
pub mod topology;

pub use crate::convert::{ArtifactPaths, ConversionSummary, Converter};
pub use crate::error::PackError;

use crate::model::TopologyTree;
use crate::topology::ChunkSize;

// ============================================================================
// Quick API
// ============================================================================
/// Packs topology bits with the default chunk size of 51 bits.
///
/// See [`topology::pack_topology`] for full documentation.
pub fn pack_topology_default(bits: &[u8]) -> Result<Vec<u64>, PackError> {
    topology::pack_topology(bits, ChunkSize::default())
}

/// Writes the three artifacts of `tree` to new files using default settings.
///
/// See [`Converter::convert_to_files`] for full documentation.
pub fn write_artifacts<T: TopologyTree + ?Sized>(
    tree: &T,
    paths: &ArtifactPaths,
) -> Result<ConversionSummary, PackError> {
    Converter::default().convert_to_files(tree, paths)
}
