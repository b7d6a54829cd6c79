//! # CLI Interface
//!
//! Defines the command-line argument structure for `intkey-forge`
//! using `clap` derive.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// intkey batch workload generator.
///
/// Fabricates signed "set key=value" transaction batches and writes
/// them to an artifact file for later submission to a validator.
#[derive(Parser, Debug)]
#[command(
    name = "intkey-forge",
    about = "intkey batch workload generator",
    version,
    propagate_version = true
)]
pub struct IntkeyForgeCli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the intkey-forge binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a pool of signed set transactions in a single batch.
    Populate(PopulateArgs),
}

/// Arguments for the `populate` subcommand.
#[derive(Parser, Debug)]
pub struct PopulateArgs {
    /// Location of the output file.
    #[arg(long, short = 'o', default_value = "batches.intkey")]
    pub output: PathBuf,

    /// Size of the word pool.
    #[arg(long, short = 'P', default_value_t = 100)]
    pub pool_size: usize,
}
