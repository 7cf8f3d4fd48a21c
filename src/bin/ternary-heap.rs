//! Interactive ternary heap
//!
//! Loads integers from a data file into a [`TernaryHeap`] and then runs the
//! command menu on stdin/stdout.
//!
//! ```bash
//! ternary-heap --data data.txt --capacity 200
//! RUST_LOG=ternary_heap=debug ternary-heap
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ternary_heap::{input, menu, BoundedHeap, TernaryHeap};

/// Bounded ternary min-heap with search, remove and delete-max
#[derive(Parser, Debug)]
#[command(name = "ternary-heap")]
#[command(version, about, long_about = None)]
struct Cli {
    /// File of whitespace-separated integers to bulk-load
    #[arg(short, long, default_value = "data.txt")]
    data: PathBuf,

    /// Maximum number of values the heap can hold
    #[arg(short, long, default_value_t = 200)]
    capacity: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut values = input::read_values_from_path(&cli.data).context("Error reading file")?;
    let mut heap = TernaryHeap::from_queue(cli.capacity, &mut values);
    tracing::info!(
        path = %cli.data.display(),
        len = heap.len(),
        capacity = heap.capacity(),
        "loaded heap"
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    menu::run(&mut heap, stdin.lock(), &mut stdout).context("menu I/O failed")?;
    Ok(())
}
