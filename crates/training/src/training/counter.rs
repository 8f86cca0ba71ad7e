//! Symbol frequency counting.
//!
//! This module builds the symbol -> count distribution a Huffman tree is
//! built from. Which characters count, and as which symbol, is decided by the
//! caller's [`Classifier`].

use ahash::AHashMap;
use huffer_core::{Classifier, HuffError, Result, Symbol};

/// Symbol -> occurrence count.
///
/// Counts are signed so hand-built tables can carry any value; the tree
/// builder clamps negative counts to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: AHashMap<Symbol, i64>,
}

impl FrequencyTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            counts: AHashMap::new(),
        }
    }

    /// Create a new table with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: AHashMap::with_capacity(capacity),
        }
    }

    /// Count one more occurrence of `symbol`. The first occurrence sets it to 1.
    pub fn increment(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Set the count of `symbol`, returning the previous one.
    pub fn insert(&mut self, symbol: impl Into<Symbol>, count: i64) -> Option<i64> {
        self.counts.insert(symbol.into(), count)
    }

    /// Count every classified character of `text` into this table.
    pub fn add_text<C: Classifier>(&mut self, text: &str, classifier: &C) {
        for symbol in classifier.symbols(text) {
            self.increment(symbol);
        }
    }

    /// Count of `symbol`.
    #[inline]
    pub fn get(&self, symbol: &str) -> Option<i64> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if no symbol was counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, negative ones clamped to zero.
    ///
    /// `None` when the sum does not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        self.counts
            .values()
            .try_fold(0u64, |total, &count| total.checked_add(count.max(0) as u64))
    }

    /// Iterate over (symbol, count) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, i64)> {
        self.counts.iter().map(|(symbol, &count)| (symbol, count))
    }

    /// Pairs by descending count; equal counts by ascending symbol.
    pub fn sorted_by_frequency(&self) -> Vec<(&Symbol, i64)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        pairs
    }
}

impl<S: Into<Symbol>> FromIterator<(S, i64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, count) in iter {
            table.insert(symbol, count);
        }
        table
    }
}

/// Builds frequency tables from text.
pub struct FrequencyModel;

impl FrequencyModel {
    /// Count the symbols of `text`.
    ///
    /// Empty text is rejected with [`HuffError::EmptyInput`]. Text whose
    /// characters are all ignored by the classifier gives an empty table.
    pub fn build<C: Classifier>(text: &str, classifier: &C) -> Result<FrequencyTable> {
        if text.is_empty() {
            return Err(HuffError::EmptyInput);
        }

        let mut table = FrequencyTable::new();
        table.add_text(text, classifier);

        tracing::debug!(
            chars = text.chars().count(),
            symbols = table.len(),
            "counted symbol frequencies"
        );

        Ok(table)
    }
}
