//! Core data structures for Huffman coding.
//!
//! This module contains the ordered sequence, the merge queues built on it,
//! the tree arena and the symbol classifiers.

pub mod priority;
pub mod sequence;
pub mod symbol;
pub mod tree;

pub use priority::{HeapQueue, MergeEntry, MergeQueue, QueueKind};
pub use sequence::OrderedSequence;
pub use symbol::{Classifier, Policy, Symbol};
pub use tree::{HuffmanTree, NodeId, TreeArena, TreeNode};
