//! Prefix-code encoding and decoding.
//!
//! The encoded form is a string of `'0'`/`'1'` characters, one per bit.
//! Decoding scans it left to right and emits a symbol as soon as the bits
//! read since the last emission form a code. Because codes are prefix-free
//! the first match is the only possible one and the scan never backtracks.

use crate::core::symbol::{Classifier, Symbol};
use crate::encoding::code_table::CodeTable;
use crate::error::{HuffError, Result};

/// Output of [`Codec::encode`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoded {
    /// Encoded bits, one `'0'`/`'1'` character per bit
    pub bits: String,
    /// Number of symbols that were encoded
    pub symbol_count: usize,
}

impl Encoded {
    /// Number of bits.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Bytes needed to hold the bits once packed.
    #[inline]
    pub fn byte_count(&self) -> usize {
        self.bits.len().div_ceil(8)
    }

    /// Check if nothing was encoded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbol_count == 0
    }
}

/// Encoder/decoder over a code table and the classifier it was built with.
#[derive(Debug, Clone)]
pub struct Codec<C> {
    table: CodeTable,
    classifier: C,
}

impl<C: Classifier> Codec<C> {
    /// Create a new codec.
    pub fn new(table: CodeTable, classifier: C) -> Self {
        Self { table, classifier }
    }

    /// The code table in use.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }

    /// Encode text into a bit-string.
    ///
    /// Characters the classifier ignores are skipped, just as they were when
    /// the frequencies were counted. A classified symbol without a code is an
    /// error.
    pub fn encode(&self, text: &str) -> Result<Encoded> {
        let mut encoded = Encoded {
            bits: String::with_capacity(text.len()),
            symbol_count: 0,
        };

        for ch in text.chars() {
            let Some(symbol) = self.classifier.classify(ch) else {
                continue;
            };

            if self.table.is_empty() {
                return Err(HuffError::InvalidArgument(
                    "cannot encode with an empty code table".to_string(),
                ));
            }

            let code = self
                .table
                .get(&symbol)
                .ok_or_else(|| HuffError::UnknownSymbol(symbol.to_string()))?;
            encoded.bits.push_str(code);
            encoded.symbol_count += 1;
        }

        tracing::debug!(
            symbols = encoded.symbol_count,
            bits = encoded.bit_count(),
            "encoded text"
        );

        Ok(encoded)
    }

    /// Decode a bit-string into its symbols.
    ///
    /// A table whose only code is empty cannot be decoded from bits alone;
    /// use [`Codec::decode`] with the symbol count instead.
    pub fn decode_bits(&self, bits: &str) -> Result<Vec<Symbol>> {
        if self.table.is_degenerate() {
            return Err(HuffError::InvalidArgument(
                "single-symbol table needs the symbol count to decode".to_string(),
            ));
        }

        let mut symbols = Vec::new();
        let mut start = 0;

        for (i, byte) in bits.bytes().enumerate() {
            if byte != b'0' && byte != b'1' {
                return Err(HuffError::InvalidArgument(format!(
                    "bit-string has a non-bit character at {}",
                    i
                )));
            }

            if let Some(symbol) = self.table.symbol_for(&bits[start..=i]) {
                symbols.push(symbol.clone());
                start = i + 1;
            }
        }

        if start < bits.len() {
            return Err(HuffError::TruncatedBits { offset: start });
        }

        Ok(symbols)
    }

    /// Decode an [`Encoded`] value back into text.
    ///
    /// The result is the concatenation of the decoded symbols, which is the
    /// original text for lossless classifiers.
    pub fn decode(&self, encoded: &Encoded) -> Result<String> {
        let symbols = if self.table.is_degenerate() {
            if !encoded.bits.is_empty() {
                return Err(HuffError::InvalidArgument(
                    "single-symbol table encodes to zero bits".to_string(),
                ));
            }
            let (symbol, _) = self.table.iter().next().ok_or(HuffError::Empty)?;
            vec![symbol.clone(); encoded.symbol_count]
        } else {
            self.decode_bits(&encoded.bits)?
        };

        if symbols.len() != encoded.symbol_count {
            return Err(HuffError::InvalidArgument(format!(
                "decoded {} symbols, expected {}",
                symbols.len(),
                encoded.symbol_count
            )));
        }

        Ok(symbols.iter().map(Symbol::as_str).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::symbol::Policy;

    fn sample_codec() -> Codec<Policy> {
        let table = CodeTable::from_codes([("b", "0"), ("c", "10"), ("a", "11")]).unwrap();
        Codec::new(table, Policy::Identity)
    }

    #[test]
    fn test_encode() {
        let codec = sample_codec();
        let encoded = codec.encode("aabbbc").unwrap();

        assert_eq!(encoded.bits, "111100010");
        assert_eq!(encoded.symbol_count, 6);
        assert_eq!(encoded.bit_count(), 9);
        assert_eq!(encoded.byte_count(), 2);
    }

    #[test]
    fn test_encode_empty_text() {
        let codec = sample_codec();
        let encoded = codec.encode("").unwrap();

        assert!(encoded.is_empty());
        assert_eq!(encoded.bits, "");
    }

    #[test]
    fn test_encode_unknown_symbol_fails() {
        let codec = sample_codec();
        assert!(matches!(
            codec.encode("abd"),
            Err(HuffError::UnknownSymbol(s)) if s == "d"
        ));
    }

    #[test]
    fn test_encode_with_empty_table() {
        let codec = Codec::new(CodeTable::default(), Policy::Alphanumeric);

        assert!(codec.encode("  ").unwrap().is_empty());
        assert!(matches!(
            codec.encode("a"),
            Err(HuffError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_decode_roundtrip() {
        let codec = sample_codec();
        let encoded = codec.encode("abcabcbbb").unwrap();

        assert_eq!(codec.decode(&encoded).unwrap(), "abcabcbbb");
    }

    #[test]
    fn test_decode_bits() {
        let codec = sample_codec();
        let symbols = codec.decode_bits("011100").unwrap();
        assert_eq!(symbols, vec!["b", "a", "c", "b"]);
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        let codec = sample_codec();

        assert!(matches!(
            codec.decode_bits("01x"),
            Err(HuffError::InvalidArgument(_))
        ));
        assert!(matches!(
            codec.decode_bits("0111"),
            Err(HuffError::TruncatedBits { offset: 3 })
        ));

        let short = Encoded {
            bits: "0".to_string(),
            symbol_count: 2,
        };
        assert!(matches!(
            codec.decode(&short),
            Err(HuffError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let table = CodeTable::from_codes([("a", "")]).unwrap();
        let codec = Codec::new(table, Policy::Identity);

        let encoded = codec.encode("aaaaa").unwrap();
        assert_eq!(encoded.bits, "");
        assert_eq!(encoded.symbol_count, 5);
        assert_eq!(codec.decode(&encoded).unwrap(), "aaaaa");

        assert!(matches!(
            codec.decode_bits(""),
            Err(HuffError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lossy_policy_decodes_to_symbols() {
        let table =
            CodeTable::from_codes([("a", "0"), ("Space", "10"), ("Punctuation", "11")]).unwrap();
        let codec = Codec::new(table, Policy::Bucketed);

        let encoded = codec.encode("a a.").unwrap();
        assert_eq!(encoded.bits, "010011");
        assert_eq!(codec.decode(&encoded).unwrap(), "aSpaceaPunctuation");
    }

    #[test]
    fn test_alphanumeric_policy_skips_ignored_characters() {
        let table = CodeTable::from_codes([("a", "0"), ("b", "1")]).unwrap();
        let codec = Codec::new(table, Policy::Alphanumeric);

        let encoded = codec.encode("a, b!").unwrap();
        assert_eq!(encoded.bits, "01");
        assert_eq!(codec.decode(&encoded).unwrap(), "ab");
    }
}
