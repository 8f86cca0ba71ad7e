//! Huffer-training - frequency modelling and tree construction
//!
//! This crate turns text into the Huffman tree its codes come from.
//!
//! # Features
//!
//! - Symbol counting under any `Classifier` policy
//! - Greedy tree construction with deterministic weight/label tie-breaking
//! - Choice of merge queue (sorted sequence or 8-ary heap) with identical results
//!
//! # Example
//!
//! ```rust
//! use huffer_core::Policy;
//! use huffer_training::{FrequencyModel, TreeBuilder};
//!
//! let frequencies = FrequencyModel::build("aabbbc", &Policy::Identity)?;
//! let codes = TreeBuilder::default().build_codes(&frequencies)?;
//!
//! assert_eq!(codes.get("b"), Some("0"));
//! assert_eq!(codes.get("c"), Some("10"));
//! assert_eq!(codes.get("a"), Some("11"));
//! # Ok::<(), huffer_core::HuffError>(())
//! ```

pub use huffer_core::{HuffError, Result};

// Frequency counting and tree construction
pub mod training;
pub use training::{BuildConfig, FrequencyModel, FrequencyTable, TreeBuilder};
