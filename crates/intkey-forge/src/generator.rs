//! The populate driver.
//!
//! One keypair signs every transaction and the single batch; the run
//! either fully succeeds or aborts on the first error. There is no
//! concurrency and no partial-output cleanup.

use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use intkey_forge_core::{
    BatchBuilder, BatchList, IntkeyPayload, Keypair, TransactionBuilder, Verb,
};

use crate::error::ForgeError;
use crate::words::{FallbackWords, WordSource};

/// Lower bound (inclusive) of generated values.
pub const VALUE_MIN: u32 = 9000;

/// Upper bound (exclusive) of generated values.
pub const VALUE_MAX: u32 = 100_000;

/// Configuration for a populate run.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    /// Number of words, and therefore transactions, to generate.
    pub pool_size: usize,

    /// Path of the artifact file. Overwritten if present.
    pub output: PathBuf,
}

impl PopulateConfig {
    /// Create a config.
    pub fn new(pool_size: usize, output: impl Into<PathBuf>) -> Self {
        Self {
            pool_size,
            output: output.into(),
        }
    }
}

/// What a populate run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulateSummary {
    /// Transactions generated (equals the word count actually supplied).
    pub transaction_count: usize,

    /// Batches written (always 1 for this generator).
    pub batch_count: usize,

    /// Size of the artifact file in bytes.
    pub bytes_written: usize,
}

/// Generate a batch of signed `set` transactions and write the artifact.
///
/// A fresh keypair signs everything; the word pool comes from the
/// system dictionary when readable, synthesized words otherwise.
pub fn populate(config: &PopulateConfig) -> Result<PopulateSummary, ForgeError> {
    populate_with(config, &Keypair::generate(), &mut FallbackWords::system())
}

/// Like [`populate`], with the signer and word source injected.
///
/// Injection keeps fixtures reproducible: a seeded keypair and a fixed
/// word source always sign the same set of names.
pub fn populate_with(
    config: &PopulateConfig,
    keypair: &Keypair,
    words: &mut dyn WordSource,
) -> Result<PopulateSummary, ForgeError> {
    let words = words.words(config.pool_size)?;
    debug!(
        requested = config.pool_size,
        supplied = words.len(),
        "word pool ready"
    );

    let mut rng = rand::thread_rng();
    let transactions: Vec<_> = words
        .iter()
        .map(|name| {
            let value = rng.gen_range(VALUE_MIN..VALUE_MAX);
            TransactionBuilder::new(IntkeyPayload::new(Verb::Set, name.as_str(), value))
                .sign(keypair)
        })
        .collect();
    let transaction_count = transactions.len();

    let batch = BatchBuilder::new(transactions).sign(keypair);
    let batch_list = BatchList::new(vec![batch]);

    let bytes = batch_list.to_bytes();
    fs::write(&config.output, &bytes)?;

    info!(
        transactions = transaction_count,
        bytes = bytes.len(),
        output = %config.output.display(),
        "wrote batch list"
    );

    Ok(PopulateSummary {
        transaction_count,
        batch_count: batch_list.len(),
        bytes_written: bytes.len(),
    })
}

/// Read an artifact file back into a [`BatchList`].
pub fn read_batch_list(path: impl AsRef<Path>) -> Result<BatchList, ForgeError> {
    let bytes = fs::read(path)?;
    Ok(BatchList::from_bytes(&bytes)?)
}
