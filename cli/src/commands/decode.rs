//! Decode command implementation.

use clap::Parser;

/// Decode command arguments.
#[derive(Debug, Parser)]
pub struct DecodeCommand {
    /// Archive written by `huffer encode --output`
    #[arg(short, long)]
    pub archive: String,
}

use anyhow::Result as AnyhowResult;
use huffer_compressor::ArchiveLoader;
use std::path::Path;

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    let compressed = ArchiveLoader::load(Path::new(&cmd.archive))?;
    let text = compressed.decode()?;

    println!("{}", text);

    Ok(())
}
