//! Conversion of a whole tree into its three binary artifacts.
//!
//! This module provides [Converter], which drives
//! [write_records](crate::records::write_records) and
//! [pack_topology](crate::topology::pack_topology) over a [TopologyTree]
//! and writes the results either to arbitrary sinks or to new files.

use crate::artifact::write_topology_words;
use crate::error::PackError;
use crate::model::TopologyTree;
use crate::records::write_records;
use crate::topology::{ChunkSize, pack_topology};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, debug_span, warn};

/// Buffer capacity for each artifact file writer
const FILE_BUFFER_SIZE: usize = 1 << 20;

// =#========================================================================#=
// ARTIFACT PATHS
// =#========================================================================#=
/// Output locations of the three artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Branch lengths (8-byte big-endian doubles)
    pub lengths: PathBuf,
    /// Concatenated labels
    pub labels: PathBuf,
    /// Packed topology (8-byte big-endian unsigned words)
    pub topology: PathBuf,
}

impl ArtifactPaths {
    /// Creates the set of artifact paths.
    pub fn new<P, Q, R>(lengths: P, labels: Q, topology: R) -> Self
    where
        P: Into<PathBuf>,
        Q: Into<PathBuf>,
        R: Into<PathBuf>,
    {
        ArtifactPaths {
            lengths: lengths.into(),
            labels: labels.into(),
            topology: topology.into(),
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Path> {
        [&self.lengths, &self.labels, &self.topology]
            .into_iter()
            .map(PathBuf::as_path)
    }
}

// =#========================================================================#=
// CONVERSION SUMMARY
// =#========================================================================#=
/// What a conversion wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Number of nodes (and thus branch lengths) written
    pub nodes: usize,
    /// Total bytes of the labels artifact
    pub label_bytes: usize,
    /// Number of topology bits packed
    pub topology_bits: usize,
    /// Number of packed topology words written
    pub topology_words: usize,
}

// =$========================================================================$=
// CONVERTER
// =$========================================================================$=
/// Converts trees into lengths, labels and topology artifacts.
///
/// # Example
/// ```
/// use phylopack::Converter;
/// use phylopack::model::PostorderTree;
/// use phylopack::topology::ChunkSize;
///
/// let mut tree = PostorderTree::new(1).with_topology_bits(vec![1, 0]);
/// tree.add_node(Some("Kakapo".to_string()), None);
///
/// let converter = Converter::new().with_chunk_size(ChunkSize::new(32)?);
/// let (mut lengths, mut labels, mut topology) =
///     (Vec::<u8>::new(), Vec::<u8>::new(), Vec::<u8>::new());
/// let summary = converter.convert(&tree, &mut lengths, &mut labels, &mut topology)?;
///
/// assert_eq!(summary.topology_words, 1);
/// assert_eq!(topology, 2u64.to_be_bytes());
/// # Ok::<(), phylopack::PackError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter {
    chunk_size: ChunkSize,
}

impl Converter {
    /// Creates a converter with the default [ChunkSize].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chunk size used to pack the topology.
    pub fn with_chunk_size(mut self, chunk_size: ChunkSize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Converts `tree` and writes its artifacts to the given sinks.
    ///
    /// The topology is packed before anything is written, so invalid topology
    /// bits leave all sinks untouched. All sinks are flushed on success.
    ///
    /// # Errors
    /// * [PackError::InvalidBit] - if the topology contains a value other than 0 or 1
    /// * [PackError::Io] - if writing to or flushing a sink fails
    pub fn convert<T, L, B, P>(
        &self,
        tree: &T,
        lengths: &mut L,
        labels: &mut B,
        topology: &mut P,
    ) -> Result<ConversionSummary, PackError>
    where
        T: TopologyTree + ?Sized,
        L: Write + ?Sized,
        B: Write + ?Sized,
        P: Write + ?Sized,
    {
        let _span = debug_span!("convert", chunk_size = self.chunk_size.get()).entered();

        let words = pack_topology(tree.topology_bits(), self.chunk_size)?;
        self.write_packed(tree, &words, lengths, labels, topology)
    }

    /// Converts `tree` and writes its artifacts to three new files.
    ///
    /// None of the output files may exist yet; this is checked for all three
    /// paths before any file is created. If creating or writing any file
    /// fails, the files created by this call are removed again.
    ///
    /// # Errors
    /// * [PackError::OutputExists] - if any output path already exists
    /// * [PackError::InvalidBit] - if the topology contains a value other than 0 or 1;
    ///   no file is created in that case
    /// * [PackError::Io] - if creating or writing a file fails
    pub fn convert_to_files<T>(
        &self,
        tree: &T,
        paths: &ArtifactPaths,
    ) -> Result<ConversionSummary, PackError>
    where
        T: TopologyTree + ?Sized,
    {
        let _span = debug_span!("convert", chunk_size = self.chunk_size.get()).entered();

        if let Some(existing) = paths.iter().find(|path| path.exists()) {
            return Err(PackError::OutputExists(existing.to_path_buf()));
        }

        // Fail on invalid topology before touching the file system
        let words = pack_topology(tree.topology_bits(), self.chunk_size)?;

        let mut created = Vec::with_capacity(3);
        let summary = match self.write_files(tree, &words, paths, &mut created) {
            Ok(summary) => summary,
            Err(err) => {
                remove_created(&created);
                return Err(err);
            }
        };

        debug!(
            lengths = %paths.lengths.display(),
            labels = %paths.labels.display(),
            topology = %paths.topology.display(),
            nodes = summary.nodes,
            "wrote artifact files"
        );
        Ok(summary)
    }

    /// Creates the three artifact files, recording each in `created`, and
    /// writes them. Writers are dropped (and their files closed) on return.
    fn write_files<'p, T>(
        &self,
        tree: &T,
        words: &[u64],
        paths: &'p ArtifactPaths,
        created: &mut Vec<&'p Path>,
    ) -> Result<ConversionSummary, PackError>
    where
        T: TopologyTree + ?Sized,
    {
        let mut lengths = create_artifact(&paths.lengths)?;
        created.push(&paths.lengths);
        let mut labels = create_artifact(&paths.labels)?;
        created.push(&paths.labels);
        let mut topology = create_artifact(&paths.topology)?;
        created.push(&paths.topology);

        self.write_packed(tree, words, &mut lengths, &mut labels, &mut topology)
    }

    /// Writes records and already packed topology words, then flushes all sinks.
    fn write_packed<T, L, B, P>(
        &self,
        tree: &T,
        words: &[u64],
        lengths: &mut L,
        labels: &mut B,
        topology: &mut P,
    ) -> Result<ConversionSummary, PackError>
    where
        T: TopologyTree + ?Sized,
        L: Write + ?Sized,
        B: Write + ?Sized,
        P: Write + ?Sized,
    {
        let stats = write_records(tree, lengths, labels)?;
        write_topology_words(words, topology)?;

        lengths.flush()?;
        labels.flush()?;
        topology.flush()?;

        Ok(ConversionSummary {
            nodes: stats.nodes,
            label_bytes: stats.label_bytes,
            topology_bits: tree.topology_bits().len(),
            topology_words: words.len(),
        })
    }
}

fn create_artifact(path: &Path) -> Result<BufWriter<File>, PackError> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| match err.kind() {
            io::ErrorKind::AlreadyExists => PackError::OutputExists(path.to_path_buf()),
            _ => PackError::Io(err),
        })?;
    Ok(BufWriter::with_capacity(FILE_BUFFER_SIZE, file))
}

fn remove_created(created: &[&Path]) {
    for path in created {
        if let Err(err) = fs::remove_file(path) {
            warn!(path = %path.display(), %err, "could not remove partial artifact");
        }
    }
}
