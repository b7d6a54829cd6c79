//! intkey-forge binary entry point.

use anyhow::Context;
use clap::Parser;

use intkey_forge::{populate, PopulateConfig};

mod cli;
mod logging;

use cli::{Commands, IntkeyForgeCli};

fn main() -> anyhow::Result<()> {
    let args = IntkeyForgeCli::parse();
    logging::init_logging("info");

    match args.command {
        Commands::Populate(args) => {
            let config = PopulateConfig::new(args.pool_size, args.output);

            println!("Writing to {}...", config.output.display());
            let summary = populate(&config)
                .with_context(|| format!("failed to write {}", config.output.display()))?;

            tracing::info!(
                transactions = summary.transaction_count,
                bytes = summary.bytes_written,
                "populate complete"
            );
            Ok(())
        }
    }
}
