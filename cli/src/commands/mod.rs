//! CLI commands for the huffer compressor.

pub mod benchmark;
pub mod decode;
pub mod encode;
pub mod report;

pub use benchmark::BenchmarkCommand;
pub use decode::DecodeCommand;
pub use encode::EncodeCommand;
pub use report::ReportCommand;

use anyhow::{bail, Result as AnyhowResult};
use clap::{Args, ValueEnum};
use huffer_compressor::{Compressor, Policy, QueueKind};
use std::path::PathBuf;

/// Merge queue selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueueChoice {
    Sorted,
    Heap,
}

impl From<QueueChoice> for QueueKind {
    fn from(choice: QueueChoice) -> Self {
        match choice {
            QueueChoice::Sorted => QueueKind::Sorted,
            QueueChoice::Heap => QueueKind::Heap,
        }
    }
}

/// Options shared by every command that compresses text.
#[derive(Debug, Args)]
pub struct CompressArgs {
    /// Input text file
    #[arg(short, long, conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Text to compress ("-" reads stdin)
    #[arg(short, long)]
    pub text: Option<String>,

    /// Symbol policy: identity, alphanumeric or bucketed
    #[arg(short, long, default_value_t = Policy::Identity)]
    pub policy: Policy,

    /// Merge queue used to build the tree
    #[arg(short, long, value_enum, default_value_t = QueueChoice::Sorted)]
    pub queue: QueueChoice,

    /// Compress the whole input file instead of its first line
    #[arg(long, default_value_t = false)]
    pub all_lines: bool,
}

impl CompressArgs {
    /// Build the compressor these options describe.
    pub fn compressor(&self) -> Compressor {
        Compressor::builder()
            .policy(self.policy)
            .queue(self.queue.into())
            .first_line_only(!self.all_lines)
            .build()
    }

    /// Read the text to compress.
    pub fn read_text(&self) -> AnyhowResult<String> {
        match (&self.input, &self.text) {
            (Some(path), _) => {
                Ok(huffer_compressor::io::load_text(path, !self.all_lines)?)
            }
            (None, Some(text)) if text == "-" => {
                use std::io::Read;
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            (None, Some(text)) => Ok(text.clone()),
            (None, None) => bail!("either --input or --text is required"),
        }
    }
}
