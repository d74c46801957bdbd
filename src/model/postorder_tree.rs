//! In-memory [TopologyTree] with nodes stored in postorder.

use crate::model::tree::{PostorderIndex, TopologyTree};

// =#========================================================================#=
// NODE RECORD
// =#========================================================================#=
/// Data attached to a single node: its label and the length of the branch
/// to its parent, both optional.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeRecord {
    /// Label of the node (leaf name or internal support/clade name)
    pub name: Option<String>,
    /// Length of the branch to the parent
    pub length: Option<f64>,
}

impl NodeRecord {
    /// Creates a new record.
    pub fn new(name: Option<String>, length: Option<f64>) -> Self {
        NodeRecord { name, length }
    }
}

// =$========================================================================$=
// POSTORDER TREE
// =$========================================================================$=
/// A tree stored as its raw balanced-parenthesis bits plus one
/// [NodeRecord] per node, in postorder.
///
/// Nodes are kept in a contiguous vector (arena pattern) and addressed by
/// their 1-based [PostorderIndex].
///
/// # Structure
/// - The i-th added node is the node with postorder index i.
/// - The topology bits are stored as given; whether they are balanced or
///   match the number of nodes is not checked.
///
/// # Example
/// ```
/// use phylopack::model::{PostorderTree, TopologyTree};
///
/// let mut tree = PostorderTree::new(3).with_topology_bits(vec![1, 1, 0, 1, 0, 0]);
/// tree.add_node(Some("A".to_string()), Some(0.5));
/// tree.add_node(Some("B".to_string()), Some(1.0));
/// let root = tree.add_node(None, None);
///
/// assert_eq!(root, 3);
/// assert_eq!(tree.num_nodes(), 3);
/// assert_eq!(tree.name(2), Some("B"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PostorderTree {
    /// Node data, position `i - 1` holds postorder node `i`
    nodes: Vec<NodeRecord>,

    /// Balanced-parenthesis topology
    topology_bits: Vec<u8>,
}

impl PostorderTree {
    /// Creates an empty tree with capacity for `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        PostorderTree {
            nodes: Vec::with_capacity(num_nodes),
            topology_bits: Vec::with_capacity(2 * num_nodes),
        }
    }

    /// Creates a tree from node records (in postorder) and topology bits.
    pub fn from_parts(nodes: Vec<NodeRecord>, topology_bits: Vec<u8>) -> Self {
        PostorderTree { nodes, topology_bits }
    }

    /// Sets the topology bits of this tree.
    pub fn with_topology_bits(mut self, topology_bits: Vec<u8>) -> Self {
        self.topology_bits = topology_bits;
        self
    }

    /// Replaces the topology bits of this tree.
    pub fn set_topology_bits(&mut self, topology_bits: Vec<u8>) {
        self.topology_bits = topology_bits;
    }

    /// Appends the next node in postorder, returning its postorder index.
    ///
    /// # Arguments
    /// * `name` - Optional label of the node
    /// * `length` - Optional length of the branch to the parent
    pub fn add_node(&mut self, name: Option<String>, length: Option<f64>) -> PostorderIndex {
        self.nodes.push(NodeRecord::new(name, length));
        self.nodes.len()
    }

    /// Returns the record of the node at 1-based postorder `index`,
    /// or `None` if out of range.
    pub fn get(&self, index: PostorderIndex) -> Option<&NodeRecord> {
        index.checked_sub(1).and_then(|i| self.nodes.get(i))
    }
}

impl TopologyTree for PostorderTree {
    type Node = PostorderIndex;

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn postorder_node(&self, index: PostorderIndex) -> PostorderIndex {
        assert!(
            (1..=self.nodes.len()).contains(&index),
            "Postorder index {index} out of range 1..={}",
            self.nodes.len()
        );
        index
    }

    fn name(&self, node: PostorderIndex) -> Option<&str> {
        self[node].name.as_deref()
    }

    fn length(&self, node: PostorderIndex) -> Option<f64> {
        self[node].length
    }

    fn topology_bits(&self) -> &[u8] {
        &self.topology_bits
    }
}

impl std::ops::Index<PostorderIndex> for PostorderTree {
    type Output = NodeRecord;

    fn index(&self, index: PostorderIndex) -> &Self::Output {
        &self.nodes[index - 1]
    }
}
