//! Huffer CLI - Command-line interface for the prefix-code compressor.
//!
//! This is the main entry point for the `huffer` command-line tool.

mod commands;

use clap::{Parser, Subcommand};
use commands::{BenchmarkCommand, DecodeCommand, EncodeCommand, ReportCommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "huffer")]
#[command(about = "A Huffman prefix-code compressor", long_about = None)]
#[command(version)]
struct Cli {
    /// Log pipeline details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text into bits or an archive
    Encode(EncodeCommand),
    /// Decode an archive back to text
    Decode(DecodeCommand),
    /// Print symbol codes and space savings for a text
    Report(ReportCommand),
    /// Benchmark compression performance
    Benchmark(BenchmarkCommand),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Encode(cmd) => commands::encode::run(cmd)?,
        Commands::Decode(cmd) => commands::decode::run(cmd)?,
        Commands::Report(cmd) => commands::report::run(cmd)?,
        Commands::Benchmark(cmd) => commands::benchmark::run(cmd)?,
    }

    Ok(())
}
