//! Huffer-compressor - High-level compression API
//!
//! This crate ties frequency counting, tree construction and the codec
//! together behind a single `Compressor`, and adds loading input files,
//! saving archives and reporting statistics.
//!
//! # Features
//!
//! - Builder pattern for compressor configuration
//! - Identity, alphanumeric and bucketed symbol policies
//! - Parallel compression of independent documents
//! - JSON archives holding everything needed to decode
//! - Per-symbol and size statistics
//!
//! # Example
//!
//! ```rust
//! use huffer_compressor::{Compressor, Policy};
//!
//! let compressor = Compressor::builder()
//!     .policy(Policy::Identity)
//!     .build();
//!
//! let compressed = compressor.compress("aabbbc")?;
//! assert_eq!(compressed.encoded.bits, "111100010");
//! assert_eq!(compressed.decode()?, "aabbbc");
//!
//! let report = compressed.report("aabbbc")?;
//! assert_eq!(report.formatted_savings(), "66.67");
//! # Ok::<(), huffer_compressor::HuffError>(())
//! ```

// Re-export core types
pub use huffer_core::{
    CodeTable, Codec, Encoded, HuffError, HuffmanTree, Policy, QueueKind, Result,
};
pub use huffer_training::FrequencyTable;

// Compressor API
pub mod compressor;
pub use compressor::{Compressed, Compressor, CompressorBuilder, CompressorConfig};

// IO/Serialization
pub mod io;
pub use io::{ArchiveLoader, ArchiveSaver, SerializedArchive};

// Statistics
pub mod report;
pub use report::{CompressionReport, ReportRow};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
