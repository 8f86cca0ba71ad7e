//! Benchmark command implementation.

use clap::Parser;

/// Benchmark command arguments.
#[derive(Debug, Parser)]
pub struct BenchmarkCommand {
    /// Path to input text file for benchmarking
    #[arg(short, long)]
    pub input: String,

    /// Number of iterations to run
    #[arg(short = 'n', long, default_value_t = 100)]
    pub iterations: usize,

    /// Symbol policy: identity, alphanumeric or bucketed
    #[arg(short, long, default_value_t = Policy::Identity)]
    pub policy: Policy,

    /// Merge queue used to build the tree
    #[arg(short, long, value_enum, default_value_t = QueueChoice::Sorted)]
    pub queue: QueueChoice,
}

use super::QueueChoice;
use anyhow::{bail, Result as AnyhowResult};
use huffer_compressor::{Compressor, Policy};
use std::fs;
use std::time::Instant;

pub fn run(cmd: BenchmarkCommand) -> AnyhowResult<()> {
    if cmd.iterations == 0 {
        bail!("--iterations must be at least 1");
    }

    let compressor = Compressor::builder()
        .policy(cmd.policy)
        .queue(cmd.queue.into())
        .first_line_only(false)
        .build();

    // Read input text
    let text = fs::read_to_string(&cmd.input)?;

    println!("Benchmarking compression...");
    println!("  Text length: {} bytes", text.len());
    println!("  Iterations: {}", cmd.iterations);
    println!();

    // Warmup
    let _ = compressor.compress(&text);

    // Sequential
    let start = Instant::now();
    for _ in 0..cmd.iterations {
        let _ = compressor.compress(&text);
    }
    let elapsed = start.elapsed();

    let avg_time_ns = elapsed.as_nanos() / cmd.iterations as u128;
    let avg_time_ms = avg_time_ns as f64 / 1_000_000.0;
    let throughput = text.len() as f64 * cmd.iterations as f64 / elapsed.as_secs_f64();

    println!("Results:");
    println!("  Total time: {:.2}s", elapsed.as_secs_f64());
    println!("  Average time: {:.3}ms", avg_time_ms);
    println!("  Throughput: {:.0} bytes/s", throughput);

    // Parallel batch of the same document
    let batch: Vec<&str> = vec![text.as_str(); cmd.iterations];
    let start = Instant::now();
    let results = compressor.compress_batch(&batch);
    let batch_elapsed = start.elapsed();

    let failures = results.iter().filter(|r| r.is_err()).count();
    println!(
        "  Batch time: {:.2}s ({} failed)",
        batch_elapsed.as_secs_f64(),
        failures
    );

    Ok(())
}
