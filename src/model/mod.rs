//! Tree model consumed by the packer.
//!
//! # Tree access
//! Packing only needs a narrow view of a tree, described by the
//! [TopologyTree] trait:
//! - number of nodes and access by 1-based [PostorderIndex],
//! - optional label and optional branch length per node,
//! - the balanced-parenthesis topology bits.
//!
//! Implement [TopologyTree] for your own succinct tree, or fill a
//! [PostorderTree] with one [NodeRecord] per node.

pub mod postorder_tree;
pub mod tree;

pub use postorder_tree::NodeRecord;
pub use postorder_tree::PostorderTree;
pub use tree::PostorderIndex;
pub use tree::TopologyTree;
