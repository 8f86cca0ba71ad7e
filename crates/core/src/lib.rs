//! Huffer-core - Core prefix-code structures
//!
//! This crate provides the data structures and algorithms shared by every
//! stage of Huffman coding, independent of how input is loaded or results
//! are reported.
//!
//! # Features
//!
//! - Sorted, duplicate-free `OrderedSequence` used as the merge priority structure
//! - Arena-backed Huffman tree with parent back-references
//! - Pluggable symbol classification (`Classifier`, `Policy`)
//! - Prefix-free code tables and a bit-string `Codec`
//!
//! # Example
//!
//! ```rust
//! use huffer_core::{CodeTable, Codec, Policy};
//!
//! let table = CodeTable::from_codes([("b", "0"), ("c", "10"), ("a", "11")])?;
//! let codec = Codec::new(table, Policy::Identity);
//!
//! let encoded = codec.encode("aabbbc")?;
//! assert_eq!(encoded.bits, "111100010");
//! assert_eq!(codec.decode(&encoded)?, "aabbbc");
//! # Ok::<(), huffer_core::HuffError>(())
//! ```

pub mod error;
pub use error::{HuffError, Result};

// Core data structures
pub mod core;
pub use core::{
    Classifier, HeapQueue, HuffmanTree, MergeEntry, MergeQueue, NodeId, OrderedSequence, Policy,
    QueueKind, Symbol, TreeArena, TreeNode,
};

// Code tables and the codec
pub mod encoding;
pub use encoding::{CodeTable, Codec, Encoded};
