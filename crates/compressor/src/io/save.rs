//! Save functionality for compressed archives.

use super::format::{SerializedArchive, SerializedCode, SerializedFrequency};
use crate::compressor::Compressed;
use crate::VERSION;
use huffer_core::{HuffError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Archive saver - writes compression results to disk.
pub struct ArchiveSaver<'a> {
    compressed: &'a Compressed,
}

impl<'a> ArchiveSaver<'a> {
    /// Create a new archive saver.
    pub fn new(compressed: &'a Compressed) -> Self {
        Self { compressed }
    }

    /// Save the archive as a pretty-printed JSON file.
    ///
    /// Missing parent directories are created.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                HuffError::Save(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = File::create(path).map_err(|e| {
            HuffError::Save(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.serialize())
            .map_err(|e| HuffError::Save(format!("Failed to serialize archive: {}", e)))?;
        writer
            .flush()
            .map_err(|e| HuffError::Save(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::info!(path = %path.display(), "saved archive");
        Ok(())
    }

    /// Serialize the archive to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.serialize())?)
    }

    /// Serialize the archive to a structure.
    pub(crate) fn serialize(&self) -> SerializedArchive {
        let compressed = self.compressed;

        let codes = compressed
            .codes
            .sorted()
            .into_iter()
            .map(|(symbol, code)| SerializedCode {
                symbol: symbol.to_string(),
                code: code.to_string(),
            })
            .collect();

        let frequencies = compressed
            .frequencies
            .sorted_by_frequency()
            .into_iter()
            .map(|(symbol, count)| SerializedFrequency {
                symbol: symbol.to_string(),
                count,
            })
            .collect();

        SerializedArchive {
            version: VERSION.to_string(),
            policy: compressed.policy,
            codes,
            frequencies,
            bits: compressed.encoded.bits.clone(),
            symbol_count: compressed.encoded.symbol_count,
            original_bytes: compressed.original_bytes,
        }
    }
}
