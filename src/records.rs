//! Writing per-node branch lengths and labels.

use crate::error::PackError;
use crate::model::TopologyTree;
use std::io::Write;
use tracing::debug;

/// Branch length written for nodes without one.
pub const DEFAULT_LENGTH: f64 = 0.0;

/// Counts of what [write_records] wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordStats {
    /// Number of nodes, i.e. lengths written
    pub nodes: usize,
    /// Total bytes written to the labels sink
    pub label_bytes: usize,
}

/// Writes the branch length and label of every node of `tree`, in
/// postorder `1..=n`, to two parallel sinks.
///
/// - `lengths` receives one 8-byte big-endian IEEE-754 double per node;
///   a missing length is written as [DEFAULT_LENGTH].
/// - `labels` receives the UTF-8 bytes of each label without any delimiter;
///   a missing label contributes no bytes.
///
/// Sinks are neither flushed nor buffered here.
///
/// # Errors
/// Returns [PackError::Io] on the first failed write; nothing is retried.
///
/// # Example
/// ```
/// use phylopack::model::PostorderTree;
/// use phylopack::records::write_records;
///
/// let mut tree = PostorderTree::new(2);
/// tree.add_node(Some("Takahe".to_string()), None);
/// tree.add_node(None, Some(2.0));
///
/// let (mut lengths, mut labels) = (Vec::<u8>::new(), Vec::<u8>::new());
/// let stats = write_records(&tree, &mut lengths, &mut labels)?;
/// assert_eq!(stats.nodes, 2);
/// assert_eq!(lengths.len(), 16);
/// assert_eq!(labels, b"Takahe");
/// # Ok::<(), phylopack::PackError>(())
/// ```
pub fn write_records<T, L, B>(
    tree: &T,
    lengths: &mut L,
    labels: &mut B,
) -> Result<RecordStats, PackError>
where
    T: TopologyTree + ?Sized,
    L: Write + ?Sized,
    B: Write + ?Sized,
{
    let mut stats = RecordStats::default();

    for index in 1..=tree.num_nodes() {
        let node = tree.postorder_node(index);

        let length = tree.length(node).unwrap_or(DEFAULT_LENGTH);
        lengths.write_all(&length.to_be_bytes())?;

        let label = tree.name(node).unwrap_or_default();
        labels.write_all(label.as_bytes())?;

        stats.nodes += 1;
        stats.label_bytes += label.len();
    }

    debug!(nodes = stats.nodes, label_bytes = stats.label_bytes, "wrote node records");
    Ok(stats)
}
