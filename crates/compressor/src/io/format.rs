//! Format definitions for archive serialization.

use huffer_core::Policy;
use serde::{Deserialize, Serialize};

/// A single symbol code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedCode {
    pub symbol: String,
    pub code: String,
}

/// A single symbol count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedFrequency {
    pub symbol: String,
    pub count: i64,
}

/// Complete archive serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedArchive {
    /// Format version
    pub version: String,
    /// Classification policy the codes were built under
    pub policy: Policy,
    /// Codes, shortest first
    pub codes: Vec<SerializedCode>,
    /// Symbol counts, most frequent first
    #[serde(default)]
    pub frequencies: Vec<SerializedFrequency>,
    /// Encoded bits as a `'0'`/`'1'` string
    pub bits: String,
    /// Number of encoded symbols
    pub symbol_count: usize,
    /// UTF-8 size of the original text
    pub original_bytes: usize,
}
