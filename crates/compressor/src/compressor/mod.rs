//! Main compressor implementation.
//!
//! This module provides the high-level `Compressor` that runs the whole
//! pipeline: frequency model, tree, code table and codec.

use crate::io::input;
use crate::report::CompressionReport;
use huffer_core::{CodeTable, Codec, Encoded, HuffmanTree, Policy, QueueKind, Result};
use huffer_training::{BuildConfig, FrequencyModel, FrequencyTable, TreeBuilder};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for building a compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressorConfig {
    /// Symbol classification policy
    pub policy: Policy,
    /// Merge queue used to build trees
    pub queue: QueueKind,
    /// Only compress the first line of loaded files
    pub first_line_only: bool,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            policy: Policy::Identity,
            queue: QueueKind::Sorted,
            first_line_only: true,
        }
    }
}

/// Builder for creating a compressor.
#[derive(Clone, Default)]
pub struct CompressorBuilder {
    config: CompressorConfig,
}

impl CompressorBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classification policy.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the merge queue.
    pub fn queue(mut self, queue: QueueKind) -> Self {
        self.config.queue = queue;
        self
    }

    /// Keep only the first line of loaded files.
    pub fn first_line_only(mut self, first_line_only: bool) -> Self {
        self.config.first_line_only = first_line_only;
        self
    }

    /// Build the compressor.
    pub fn build(self) -> Compressor {
        Compressor::new(self.config)
    }
}

/// Everything produced by compressing one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed {
    /// Policy the text was classified with
    pub policy: Policy,
    /// Symbol frequencies of the text
    pub frequencies: FrequencyTable,
    /// Code table derived from the frequencies
    pub codes: CodeTable,
    /// Encoded bits
    pub encoded: Encoded,
    /// UTF-8 size of the original text
    pub original_bytes: usize,
}

impl Compressed {
    /// Decode the bits back into text.
    pub fn decode(&self) -> Result<String> {
        Codec::new(self.codes.clone(), self.policy).decode(&self.encoded)
    }

    /// Statistics report for this result.
    pub fn report(&self, original: &str) -> Result<CompressionReport> {
        let decoded = self.decode()?;
        Ok(CompressionReport::new(self, original, &decoded))
    }
}

/// Main compressor struct.
#[derive(Debug, Clone)]
pub struct Compressor {
    config: CompressorConfig,
    tree_builder: TreeBuilder,
}

impl Compressor {
    /// Create a new compressor with the given configuration.
    pub fn new(config: CompressorConfig) -> Self {
        Self {
            config,
            tree_builder: TreeBuilder::new(BuildConfig {
                queue: config.queue,
            }),
        }
    }

    /// Create a builder.
    pub fn builder() -> CompressorBuilder {
        CompressorBuilder::new()
    }

    /// The compressor configuration.
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Build the Huffman tree for a frequency table with this compressor's
    /// queue.
    pub fn build_tree(&self, frequencies: &FrequencyTable) -> Result<Option<HuffmanTree>> {
        self.tree_builder.build(frequencies)
    }

    /// Compress one text.
    pub fn compress(&self, text: &str) -> Result<Compressed> {
        let frequencies = FrequencyModel::build(text, &self.config.policy)?;
        let tree = self.build_tree(&frequencies)?;

        if let Some(tree) = &tree {
            tracing::trace!("huffman tree:\n{}", tree.render());
        }

        let codes = CodeTable::from_tree(tree.as_ref());
        let codec = Codec::new(codes, self.config.policy);
        let encoded = codec.encode(text)?;

        tracing::info!(
            policy = %self.config.policy,
            lossless = self.config.policy.is_lossless(),
            symbols = frequencies.len(),
            original_bytes = text.len(),
            encoded_bits = encoded.bit_count(),
            "compressed text"
        );

        Ok(Compressed {
            policy: self.config.policy,
            frequencies,
            codes: codec.table().clone(),
            encoded,
            original_bytes: text.len(),
        })
    }

    /// Load a file and compress it.
    ///
    /// Returns the loaded text alongside the result so callers can report on
    /// it.
    pub fn compress_file(&self, path: &Path) -> Result<(String, Compressed)> {
        let text = input::load_text(path, self.config.first_line_only)?;
        let compressed = self.compress(&text)?;
        Ok((text, compressed))
    }

    /// Compress independent documents in parallel.
    ///
    /// Each document gets its own tree and code table; results keep the
    /// input order.
    pub fn compress_batch<S>(&self, texts: &[S]) -> Vec<Result<Compressed>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.compress(text.as_ref()))
            .collect()
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new(CompressorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huffer_core::HuffError;
    use proptest::prelude::*;

    #[test]
    fn test_builder() {
        let compressor = Compressor::builder()
            .policy(Policy::Bucketed)
            .queue(QueueKind::Heap)
            .first_line_only(false)
            .build();

        assert_eq!(compressor.config().policy, Policy::Bucketed);
        assert_eq!(compressor.config().queue, QueueKind::Heap);
        assert!(!compressor.config().first_line_only);
    }

    #[test]
    fn test_compress_sample() {
        let compressed = Compressor::default().compress("aabbbc").unwrap();

        assert_eq!(compressed.codes.get("b"), Some("0"));
        assert_eq!(compressed.codes.get("c"), Some("10"));
        assert_eq!(compressed.codes.get("a"), Some("11"));
        assert_eq!(compressed.encoded.bits, "111100010");
        assert_eq!(compressed.original_bytes, 6);
        assert_eq!(compressed.decode().unwrap(), "aabbbc");
    }

    #[test]
    fn test_compress_empty_text() {
        assert!(matches!(
            Compressor::default().compress(""),
            Err(HuffError::EmptyInput)
        ));
    }

    #[test]
    fn test_compress_single_symbol() {
        let compressed = Compressor::default().compress("aaaaa").unwrap();

        assert_eq!(compressed.codes.get("a"), Some(""));
        assert_eq!(compressed.encoded.bit_count(), 0);
        assert_eq!(compressed.decode().unwrap(), "aaaaa");
    }

    #[test]
    fn test_compress_nothing_counted() {
        let compressor = Compressor::builder().policy(Policy::Alphanumeric).build();
        let compressed = compressor.compress("?! ...").unwrap();

        assert!(compressed.codes.is_empty());
        assert!(compressed.encoded.is_empty());
        assert_eq!(compressed.decode().unwrap(), "");
    }

    #[test]
    fn test_compress_bucketed() {
        let compressor = Compressor::builder().policy(Policy::Bucketed).build();
        let compressed = compressor.compress("a, b").unwrap();

        assert_eq!(compressed.frequencies.get("Punctuation"), Some(1));
        assert_eq!(compressed.frequencies.get("Space"), Some(1));
        assert_eq!(compressed.decode().unwrap(), "aPunctuationSpaceb");
    }

    #[test]
    fn test_compress_batch_keeps_order() {
        let compressor = Compressor::default();
        let texts = ["abracadabra", "", "mississippi"];
        let results = compressor.compress_batch(&texts);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().decode().unwrap(), "abracadabra");
        assert!(matches!(results[1], Err(HuffError::EmptyInput)));
        assert_eq!(results[2].as_ref().unwrap().decode().unwrap(), "mississippi");
    }

    #[test]
    fn test_build_tree_matches_codes() {
        let compressor = Compressor::default();
        let compressed = compressor.compress("aabbbc").unwrap();
        let tree = compressor
            .build_tree(&compressed.frequencies)
            .unwrap()
            .unwrap();

        assert_eq!(tree.weight(), 6);
        assert_eq!(CodeTable::from_tree(Some(&tree)), compressed.codes);
    }

    #[test]
    fn test_compress_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "aabbbc\nignored second line\n").unwrap();

        let (text, compressed) = Compressor::default().compress_file(file.path()).unwrap();
        assert_eq!(text, "aabbbc");
        assert_eq!(compressed.encoded.bits, "111100010");

        let all_lines = Compressor::builder().first_line_only(false).build();
        let (text, _) = all_lines.compress_file(file.path()).unwrap();
        assert_eq!(text, "aabbbc\nignored second line\n");
    }

    #[test]
    fn test_queue_kinds_encode_identically() {
        let text = "it was the best of times, it was the worst of times";
        let sorted = Compressor::builder().queue(QueueKind::Sorted).build();
        let heap = Compressor::builder().queue(QueueKind::Heap).build();

        assert_eq!(
            sorted.compress(text).unwrap().encoded,
            heap.compress(text).unwrap().encoded
        );
    }

    proptest! {
        #[test]
        fn identity_roundtrip(text in "\\PC{1,200}") {
            let compressed = Compressor::default().compress(&text).unwrap();
            prop_assert_eq!(compressed.decode().unwrap(), text);
        }

        #[test]
        fn lossy_policies_roundtrip_to_symbols(text in "[a-zA-Z0-9 ,.;:'\"(){}\\[\\]\t!?-]{1,120}") {
            for policy in [Policy::Alphanumeric, Policy::Bucketed] {
                let compressor = Compressor::builder().policy(policy).build();
                let compressed = compressor.compress(&text).unwrap();

                let expected: String = text
                    .chars()
                    .filter_map(|ch| huffer_core::Classifier::classify(&policy, ch))
                    .map(|symbol| symbol.to_string())
                    .collect();
                prop_assert_eq!(compressed.decode().unwrap(), expected);
            }
        }

        #[test]
        fn encoded_never_longer_than_fixed_width(text in "[a-h]{2,200}") {
            let compressed = Compressor::default().compress(&text).unwrap();
            let symbols = compressed.frequencies.len() as f64;
            let fixed_width = symbols.log2().ceil().max(1.0) as usize;

            prop_assert!(compressed.encoded.bit_count() <= fixed_width * text.chars().count());
        }
    }
}
