//! Priority structures for Huffman merges.
//!
//! The tree builder repeatedly extracts the two lightest nodes. Entries are
//! ordered by weight, then label, then node id; the id only breaks ties
//! between distinct nodes that happen to share weight and label, so no merge
//! candidate is ever treated as a duplicate.

use crate::core::sequence::OrderedSequence;
use crate::core::tree::NodeId;
use compact_str::CompactString;
use dary_heap::OctonaryHeap;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};

/// A tree node waiting to be merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeEntry {
    /// Weight of the subtree
    pub weight: u64,
    /// Label of the subtree root (tie-break)
    pub label: CompactString,
    /// Node in the tree arena
    pub node: NodeId,
}

impl MergeEntry {
    /// Create a new merge entry.
    pub fn new(weight: u64, label: impl Into<CompactString>, node: NodeId) -> Self {
        Self {
            weight,
            label: label.into(),
            node,
        }
    }
}

// Lower weight first, then lower label
impl Ord for MergeEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for MergeEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-extraction structure used by the tree builder.
pub trait MergeQueue {
    /// Add an entry.
    fn push(&mut self, entry: MergeEntry);

    /// Remove the lowest-ordered entry.
    fn pop_min(&mut self) -> Option<MergeEntry>;

    /// Number of entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MergeQueue for OrderedSequence<MergeEntry> {
    fn push(&mut self, entry: MergeEntry) {
        self.insert(entry);
    }

    fn pop_min(&mut self) -> Option<MergeEntry> {
        self.pop_first()
    }

    fn len(&self) -> usize {
        OrderedSequence::len(self)
    }
}

/// Heap-backed merge queue.
///
/// Uses an 8-ary heap for better cache locality than a binary heap. Produces
/// exactly the same extraction order as the sorted sequence.
pub struct HeapQueue {
    heap: OctonaryHeap<Reverse<MergeEntry>>,
}

impl HeapQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self {
            heap: OctonaryHeap::new(),
        }
    }

    /// Create a new queue with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: OctonaryHeap::with_capacity(capacity),
        }
    }

    /// Peek at the lowest entry without removing it.
    pub fn peek(&self) -> Option<&MergeEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }
}

impl Default for HeapQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl MergeQueue for HeapQueue {
    fn push(&mut self, entry: MergeEntry) {
        self.heap.push(Reverse(entry));
    }

    fn pop_min(&mut self) -> Option<MergeEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Which merge queue the tree builder uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueKind {
    /// Linear-insert sorted sequence
    #[default]
    Sorted,
    /// 8-ary min-heap
    Heap,
}

impl QueueKind {
    /// Create an empty queue of this kind.
    pub fn create(self, capacity: usize) -> Box<dyn MergeQueue> {
        match self {
            QueueKind::Sorted => Box::new(OrderedSequence::<MergeEntry>::with_capacity(capacity)),
            QueueKind::Heap => Box::new(HeapQueue::with_capacity(capacity)),
        }
    }
}
