//! Report command implementation.

use super::CompressArgs;
use clap::Parser;

/// Report command arguments.
#[derive(Debug, Parser)]
pub struct ReportCommand {
    #[command(flatten)]
    pub compress: CompressArgs,

    /// Print the Huffman tree before the report
    #[arg(long, default_value_t = false)]
    pub tree: bool,
}

use anyhow::Result as AnyhowResult;

pub fn run(cmd: ReportCommand) -> AnyhowResult<()> {
    let text = cmd.compress.read_text()?;
    let compressor = cmd.compress.compressor();
    let compressed = compressor.compress(&text)?;

    if cmd.tree {
        if let Some(tree) = compressor.build_tree(&compressed.frequencies)? {
            println!("{}", tree.render());
            println!();
        }
    }

    println!("{}", compressed.report(&text)?);

    Ok(())
}
