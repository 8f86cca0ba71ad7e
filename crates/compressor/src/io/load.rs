//! Load functionality for compressed archives.

use super::format::SerializedArchive;
use crate::compressor::Compressed;
use huffer_core::{CodeTable, Encoded, HuffError, Result};
use huffer_training::FrequencyTable;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Archive loader - reads compression results from disk.
pub struct ArchiveLoader;

impl ArchiveLoader {
    /// Load an archive from a JSON file.
    pub fn load(path: &Path) -> Result<Compressed> {
        let file = File::open(path).map_err(|e| {
            HuffError::Load(format!("Failed to open file {}: {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let serialized: SerializedArchive = serde_json::from_reader(reader)
            .map_err(|e| HuffError::Load(format!("Failed to deserialize archive: {}", e)))?;

        tracing::debug!(path = %path.display(), version = %serialized.version, "loaded archive");
        Self::deserialize(serialized)
    }

    /// Load an archive from a JSON string.
    pub fn from_json(json: &str) -> Result<Compressed> {
        let serialized: SerializedArchive = serde_json::from_str(json)
            .map_err(|e| HuffError::Load(format!("Failed to deserialize archive: {}", e)))?;
        Self::deserialize(serialized)
    }

    /// Rebuild a result from its serialized structure.
    ///
    /// The code table is validated again, so a tampered archive with
    /// overlapping codes is rejected here rather than mis-decoded later.
    fn deserialize(data: SerializedArchive) -> Result<Compressed> {
        let codes = CodeTable::from_codes(
            data.codes
                .into_iter()
                .map(|entry| (entry.symbol, entry.code)),
        )
        .map_err(|e| HuffError::Load(format!("Invalid code table: {}", e)))?;

        if let Some(offset) = data.bits.find(|c: char| c != '0' && c != '1') {
            return Err(HuffError::Load(format!(
                "Encoded bits have a non-bit character at {}",
                offset
            )));
        }

        let frequencies: FrequencyTable = data
            .frequencies
            .into_iter()
            .map(|entry| (entry.symbol, entry.count))
            .collect();

        if let Some((symbol, _)) = frequencies.iter().find(|(s, _)| codes.get(s).is_none()) {
            return Err(HuffError::Load(format!(
                "Frequency for symbol {:?} without a code",
                symbol
            )));
        }

        Ok(Compressed {
            policy: data.policy,
            frequencies,
            codes,
            encoded: Encoded {
                bits: data.bits,
                symbol_count: data.symbol_count,
            },
            original_bytes: data.original_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compressor::Compressor;
    use crate::io::save::ArchiveSaver;
    use huffer_core::Policy;

    #[test]
    fn test_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.json");

        let compressed = Compressor::default()
            .compress("she sells sea shells")
            .unwrap();
        ArchiveSaver::new(&compressed).save(&path).unwrap();

        let loaded = ArchiveLoader::load(&path).unwrap();
        assert_eq!(loaded, compressed);
        assert_eq!(loaded.decode().unwrap(), "she sells sea shells");
    }

    #[test]
    fn test_load_lossy_policy() {
        let compressor = Compressor::builder().policy(Policy::Bucketed).build();
        let compressed = compressor.compress("a b, c").unwrap();

        let json = ArchiveSaver::new(&compressed).to_json().unwrap();
        let loaded = ArchiveLoader::from_json(&json).unwrap();

        assert_eq!(loaded.policy, Policy::Bucketed);
        assert_eq!(loaded.decode().unwrap(), "aSpacebPunctuationSpacec");
    }

    #[test]
    fn test_load_single_symbol() {
        let compressed = Compressor::default().compress("zzzz").unwrap();
        let json = ArchiveSaver::new(&compressed).to_json().unwrap();

        let loaded = ArchiveLoader::from_json(&json).unwrap();
        assert_eq!(loaded.decode().unwrap(), "zzzz");
    }

    #[test]
    fn test_load_rejects_overlapping_codes() {
        let json = r#"{
            "version": "0.1.0",
            "policy": "identity",
            "codes": [{"symbol": "a", "code": "0"}, {"symbol": "b", "code": "01"}],
            "bits": "0",
            "symbol_count": 1,
            "original_bytes": 1
        }"#;

        assert!(matches!(
            ArchiveLoader::from_json(json),
            Err(HuffError::Load(_))
        ));
    }

    #[test]
    fn test_load_rejects_bad_bits() {
        let json = r#"{
            "version": "0.1.0",
            "policy": "identity",
            "codes": [{"symbol": "a", "code": "0"}, {"symbol": "b", "code": "1"}],
            "bits": "01x",
            "symbol_count": 3,
            "original_bytes": 3
        }"#;

        assert!(matches!(
            ArchiveLoader::from_json(json),
            Err(HuffError::Load(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ArchiveLoader::load(&dir.path().join("nope.json")),
            Err(HuffError::Load(_))
        ));
    }
}
