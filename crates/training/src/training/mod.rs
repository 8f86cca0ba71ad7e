//! Frequency counting and Huffman tree construction.

pub mod counter;
pub mod tree_builder;

pub use counter::{FrequencyModel, FrequencyTable};
pub use tree_builder::{BuildConfig, TreeBuilder};
