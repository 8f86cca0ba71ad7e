//! Compression statistics.
//!
//! A report lists every symbol with its frequency and code, the original,
//! encoded and decoded texts, and the space saved by the encoding. Sizes
//! compare the UTF-8 length of the original text with the encoded bits
//! packed into whole bytes.

use crate::compressor::Compressed;
use std::fmt;

/// One row of the symbol table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub symbol: String,
    pub frequency: i64,
    pub code: String,
}

/// Statistics for a single compression.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressionReport {
    rows: Vec<ReportRow>,
    original: String,
    encoded: String,
    decoded: String,
    original_bytes: usize,
    encoded_bytes: usize,
}

impl CompressionReport {
    /// Build the report for a compression of `original` that decoded to
    /// `decoded`.
    pub fn new(compressed: &Compressed, original: &str, decoded: &str) -> Self {
        let mut rows: Vec<ReportRow> = compressed
            .frequencies
            .iter()
            .map(|(symbol, frequency)| ReportRow {
                symbol: symbol.to_string(),
                frequency,
                code: compressed.codes.get(symbol).unwrap_or_default().to_string(),
            })
            .collect();

        // Most frequent first; ties in reverse symbol order
        rows.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| b.symbol.cmp(&a.symbol))
        });

        Self {
            rows,
            original: original.to_string(),
            encoded: compressed.encoded.bits.clone(),
            decoded: decoded.to_string(),
            original_bytes: compressed.original_bytes,
            encoded_bytes: compressed.encoded.byte_count(),
        }
    }

    /// Symbol rows, most frequent first.
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Size of the original text in bytes.
    pub fn original_bytes(&self) -> usize {
        self.original_bytes
    }

    /// Size of the encoded bits in whole bytes.
    pub fn encoded_bytes(&self) -> usize {
        self.encoded_bytes
    }

    /// Space saved by the encoding, in percent of the original size.
    ///
    /// Negative when the encoding is larger. Zero for an empty original.
    pub fn savings_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        100.0 - (self.encoded_bytes as f64 / self.original_bytes as f64) * 100.0
    }

    /// Savings with at most two decimals and no trailing zeros.
    pub fn formatted_savings(&self) -> String {
        format_percent(self.savings_percent())
    }
}

/// Format with at most two decimals, dropping trailing zeros.
pub fn format_percent(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol\tFrequency   Code")?;
        writeln!(f, "------\t---------   ----")?;
        for row in &self.rows {
            writeln!(f, "{}\t{}\t    {}", row.symbol, row.frequency, row.code)?;
        }

        writeln!(f)?;
        writeln!(f, "Original String:")?;
        writeln!(f, "{}", self.original)?;
        writeln!(f, "Encoded String:")?;
        writeln!(f, "{}", self.encoded)?;
        writeln!(f, "Decoded String:")?;
        writeln!(f, "{}", self.decoded)?;

        writeln!(f)?;
        writeln!(
            f,
            "The original string requires {} bytes.",
            self.original_bytes
        )?;
        writeln!(
            f,
            "The encoded string requires {} bytes.",
            self.encoded_bytes
        )?;
        write!(
            f,
            "Difference in space required is {}%.",
            self.formatted_savings()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compressor::Compressor;

    fn sample_report() -> CompressionReport {
        Compressor::default()
            .compress("aabbbc")
            .unwrap()
            .report("aabbbc")
            .unwrap()
    }

    #[test]
    fn test_rows_ordering() {
        let report = sample_report();
        let rows: Vec<(&str, i64, &str)> = report
            .rows()
            .iter()
            .map(|r| (r.symbol.as_str(), r.frequency, r.code.as_str()))
            .collect();

        assert_eq!(rows, vec![("b", 3, "0"), ("a", 2, "11"), ("c", 1, "10")]);
    }

    #[test]
    fn test_sizes() {
        let report = sample_report();

        assert_eq!(report.original_bytes(), 6);
        assert_eq!(report.encoded_bytes(), 2);
        assert_eq!(
            report.savings_percent(),
            100.0 - (2.0 / 6.0) * 100.0
        );
        assert_eq!(report.formatted_savings(), "66.67");
    }

    #[test]
    fn test_ties_in_reverse_symbol_order() {
        let report = Compressor::default()
            .compress("abcabc")
            .unwrap()
            .report("abcabc")
            .unwrap();

        let symbols: Vec<&str> = report.rows().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(66.666_666), "66.67");
        assert_eq!(format_percent(50.0), "50");
        assert_eq!(format_percent(12.5), "12.5");
        assert_eq!(format_percent(0.0), "0");
        assert_eq!(format_percent(-0.001), "0");
        assert_eq!(format_percent(-100.0), "-100");
    }

    #[test]
    fn test_single_symbol_saves_everything() {
        let report = Compressor::default()
            .compress("aaaa")
            .unwrap()
            .report("aaaa")
            .unwrap();

        assert_eq!(report.encoded_bytes(), 0);
        assert_eq!(report.formatted_savings(), "100");
    }

    #[test]
    fn test_display() {
        let rendered = sample_report().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Symbol\tFrequency   Code");
        assert_eq!(lines[2], "b\t3\t    0");
        assert!(rendered.contains("Encoded String:\n111100010\n"));
        assert!(rendered.contains("Decoded String:\naabbbc\n"));
        assert!(rendered.contains("The original string requires 6 bytes."));
        assert!(rendered.contains("The encoded string requires 2 bytes."));
        assert!(rendered.ends_with("Difference in space required is 66.67%."));
    }
}
