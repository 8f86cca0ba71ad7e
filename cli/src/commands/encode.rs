//! Encode command implementation.

use super::CompressArgs;
use clap::Parser;

/// Encode command arguments.
#[derive(Debug, Parser)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub compress: CompressArgs,

    /// Archive file to write (bits to stdout if not specified)
    #[arg(short, long)]
    pub output: Option<String>,
}

use anyhow::Result as AnyhowResult;
use huffer_compressor::ArchiveSaver;
use std::path::Path;

pub fn run(cmd: EncodeCommand) -> AnyhowResult<()> {
    let text = cmd.compress.read_text()?;
    let compressed = cmd.compress.compressor().compress(&text)?;

    match &cmd.output {
        Some(path) => {
            ArchiveSaver::new(&compressed).save(Path::new(path))?;
            println!(
                "Encoded {} symbols ({} bits) to {}",
                compressed.encoded.symbol_count,
                compressed.encoded.bit_count(),
                path
            );
        }
        None => {
            println!("{}", compressed.encoded.bits);
        }
    }

    Ok(())
}
