//! Symbol → bit-string code tables.
//!
//! Codes are root-to-leaf paths in a strict binary tree, written with `'0'`
//! for a left step and `'1'` for a right step, so a table derived from a tree
//! is prefix-free by construction. Hand-built tables are validated.

use crate::core::symbol::Symbol;
use crate::core::tree::{HuffmanTree, NodeId};
use crate::error::{HuffError, Result};
use ahash::AHashMap;

/// Immutable mapping from symbol to prefix code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    /// Forward mapping: symbol -> code
    codes: AHashMap<Symbol, String>,
    /// Reverse mapping: code -> symbol
    symbols: AHashMap<String, Symbol>,
}

impl CodeTable {
    /// Derive the code table of a tree.
    ///
    /// `None` gives an empty table. A tree made of a single leaf gives that
    /// leaf the empty code.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> Self {
        let mut table = Self::default();

        if let Some(tree) = tree {
            let mut prefix = String::new();
            table.collect(tree, tree.root(), &mut prefix);
            tracing::trace!(codes = table.len(), "derived code table");
        }

        table
    }

    fn collect(&mut self, tree: &HuffmanTree, id: NodeId, prefix: &mut String) {
        let node = tree.node(id);

        if node.is_leaf() {
            self.insert(node.label.clone(), prefix.clone());
            return;
        }

        if let Some(left) = node.left() {
            prefix.push('0');
            self.collect(tree, left, prefix);
            prefix.pop();
        }
        if let Some(right) = node.right() {
            prefix.push('1');
            self.collect(tree, right, prefix);
            prefix.pop();
        }
    }

    fn insert(&mut self, symbol: Symbol, code: String) {
        self.symbols.insert(code.clone(), symbol.clone());
        self.codes.insert(symbol, code);
    }

    /// Build a table from explicit (symbol, code) pairs.
    ///
    /// Every code must consist of `'0'`/`'1'` only, symbols must be unique
    /// and no code may be a prefix of another.
    pub fn from_codes<I, S, C>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<Symbol>,
        C: Into<String>,
    {
        let mut table = Self::default();

        for (symbol, code) in pairs {
            let symbol = symbol.into();
            let code = code.into();

            if let Some(offset) = code.find(|c: char| c != '0' && c != '1') {
                return Err(HuffError::InvalidArgument(format!(
                    "code {:?} for symbol {:?} has a non-bit character at {}",
                    code, symbol, offset
                )));
            }
            if table.codes.contains_key(&symbol) {
                return Err(HuffError::InvalidArgument(format!(
                    "symbol {:?} has more than one code",
                    symbol
                )));
            }

            table.insert(symbol, code);
        }

        if !table.is_prefix_free() {
            return Err(HuffError::InvalidArgument(
                "codes are not prefix-free".to_string(),
            ));
        }

        Ok(table)
    }

    /// Code of `symbol`.
    #[inline]
    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    /// Symbol whose code is exactly `code`.
    #[inline]
    pub fn symbol_for(&self, code: &str) -> Option<&Symbol> {
        self.symbols.get(code)
    }

    /// Number of symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the table has no codes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over (symbol, code) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &str)> {
        self.codes.iter().map(|(symbol, code)| (symbol, code.as_str()))
    }

    /// Pairs ordered by code length, then code.
    pub fn sorted(&self) -> Vec<(&Symbol, &str)> {
        let mut pairs: Vec<_> = self.iter().collect();
        pairs.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| a.1.cmp(b.1)));
        pairs
    }

    /// Whether the table holds a single symbol with the empty code.
    pub fn is_degenerate(&self) -> bool {
        self.codes.len() == 1 && self.symbols.contains_key("")
    }

    /// Check that no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        if self.symbols.len() != self.codes.len() {
            // Two symbols share a code.
            return false;
        }

        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        codes.sort_unstable();

        // After sorting, a prefix always sits right before some extension of it.
        codes.windows(2).all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Total encoded length, in bits, of the given (symbol, count) pairs.
    pub fn encoded_len<'a, I>(&self, counts: I) -> Result<u64>
    where
        I: IntoIterator<Item = (&'a str, u64)>,
    {
        counts.into_iter().try_fold(0u64, |total, (symbol, count)| {
            let code = self
                .get(symbol)
                .ok_or_else(|| HuffError::UnknownSymbol(symbol.to_string()))?;
            (code.len() as u64)
                .checked_mul(count)
                .and_then(|bits| total.checked_add(bits))
                .ok_or_else(|| {
                    HuffError::InvalidArgument("encoded length overflows u64".to_string())
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::TreeArena;

    fn sample_tree() -> HuffmanTree {
        let mut arena = TreeArena::new();
        let a = arena.leaf(2, "a");
        let b = arena.leaf(3, "b");
        let c = arena.leaf(1, "c");
        let ca = arena.merge(c, a).unwrap();
        let root = arena.merge(b, ca).unwrap();
        arena.into_tree(root).unwrap()
    }

    #[test]
    fn test_from_tree() {
        let table = CodeTable::from_tree(Some(&sample_tree()));

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("b"), Some("0"));
        assert_eq!(table.get("c"), Some("10"));
        assert_eq!(table.get("a"), Some("11"));
        assert_eq!(table.symbol_for("10").unwrap(), "c");
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_traversal_matches_parent_walk() {
        let tree = sample_tree();
        let table = CodeTable::from_tree(Some(&tree));

        for leaf in tree.leaves() {
            let label = &tree.node(leaf).label;
            assert_eq!(table.get(label).unwrap(), tree.path_bits(leaf));
        }
    }

    #[test]
    fn test_empty_and_single_leaf() {
        assert!(CodeTable::from_tree(None).is_empty());

        let mut arena = TreeArena::new();
        let a = arena.leaf(5, "a");
        let tree = arena.into_tree(a).unwrap();
        let table = CodeTable::from_tree(Some(&tree));

        assert_eq!(table.get("a"), Some(""));
        assert!(table.is_degenerate());
        assert!(table.is_prefix_free());
    }

    #[test]
    fn test_from_codes_validation() {
        let table = CodeTable::from_codes([("x", "0"), ("y", "10"), ("z", "11")]).unwrap();
        assert_eq!(table.get("y"), Some("10"));

        assert!(matches!(
            CodeTable::from_codes([("x", "0"), ("y", "01")]),
            Err(HuffError::InvalidArgument(_))
        ));
        assert!(matches!(
            CodeTable::from_codes([("x", "0"), ("y", "0")]),
            Err(HuffError::InvalidArgument(_))
        ));
        assert!(matches!(
            CodeTable::from_codes([("x", "02")]),
            Err(HuffError::InvalidArgument(_))
        ));
        assert!(matches!(
            CodeTable::from_codes([("x", "0"), ("x", "1")]),
            Err(HuffError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_sorted() {
        let table = CodeTable::from_tree(Some(&sample_tree()));
        let sorted: Vec<(&str, &str)> = table
            .sorted()
            .into_iter()
            .map(|(s, c)| (s.as_str(), c))
            .collect();

        assert_eq!(sorted, vec![("b", "0"), ("c", "10"), ("a", "11")]);
    }

    #[test]
    fn test_encoded_len() {
        let table = CodeTable::from_tree(Some(&sample_tree()));

        let bits = table.encoded_len([("a", 2), ("b", 3), ("c", 1)]).unwrap();
        assert_eq!(bits, 2 * 2 + 3 + 2);

        assert!(matches!(
            table.encoded_len([("q", 1)]),
            Err(HuffError::UnknownSymbol(_))
        ));
        assert!(matches!(
            table.encoded_len([("a", u64::MAX)]),
            Err(HuffError::InvalidArgument(_))
        ));
    }
}
