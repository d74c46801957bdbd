//! Interface to the tree that gets packed.
//!
//! Parsing Newick strings and building succinct trees happens elsewhere;
//! this crate only needs the small view on a tree given by [TopologyTree].

/// 1-based position of a node in postorder (children before parents).
pub type PostorderIndex = usize;

// =$========================================================================$=
// TOPOLOGY TREE
// =$========================================================================$=
/// A phylogenetic tree given by its balanced-parenthesis topology and
/// per-node data, accessible in postorder.
///
/// Implement this trait for your own (succinct) tree representation to
/// pack it with [Converter](crate::Converter).
///
/// # Contract
/// - `postorder_node(i)` is called only for `i` in `1..=num_nodes()`
///   and each such `i` identifies a distinct node.
/// - `topology_bits()` returns the balanced-parenthesis sequence of the
///   whole tree, each element 0 or 1. Neither its length nor its balance is
///   checked against `num_nodes()`.
pub trait TopologyTree {
    /// Handle to a node, as handed out by [TopologyTree::postorder_node].
    type Node: Copy;

    /// Returns the number of nodes in the tree.
    fn num_nodes(&self) -> usize;

    /// Returns the node at 1-based postorder position `index`.
    ///
    /// # Panics
    /// May panic if `index` is not in `1..=num_nodes()`.
    fn postorder_node(&self, index: PostorderIndex) -> Self::Node;

    /// Returns the label of `node`, or `None` if it has none.
    fn name(&self, node: Self::Node) -> Option<&str>;

    /// Returns the length of the branch above `node`, or `None` if it has none.
    fn length(&self, node: Self::Node) -> Option<f64>;

    /// Returns the balanced-parenthesis bits of the tree.
    fn topology_bits(&self) -> &[u8];
}
