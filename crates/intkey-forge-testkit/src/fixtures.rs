//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use std::path::Path;

use intkey_forge::words::SyntheticWords;
use intkey_forge::{populate_with, ForgeError, PopulateConfig, PopulateSummary};
use intkey_forge_core::{
    Batch, BatchBuilder, Ed25519PublicKey, IntkeyPayload, Keypair, Transaction,
    TransactionBuilder, Verb,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A test fixture with a signing keypair.
pub struct TestFixture {
    pub keypair: Keypair,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self {
            keypair: Keypair::generate(),
        }
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self {
            keypair: Keypair::from_seed(&seed),
        }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Create a signed `set` transaction.
    pub fn make_set_transaction(&self, name: &str, value: u32) -> Transaction {
        TransactionBuilder::new(IntkeyPayload::new(Verb::Set, name, value)).sign(&self.keypair)
    }

    /// Create a signed batch from transactions in application order.
    pub fn make_batch(&self, transactions: Vec<Transaction>) -> Batch {
        BatchBuilder::new(transactions).sign(&self.keypair)
    }

    /// Create a signed batch of `set` transactions, one per name.
    pub fn make_populated_batch(&self, names: &[&str]) -> Batch {
        let transactions = names
            .iter()
            .enumerate()
            .map(|(i, name)| self.make_set_transaction(name, 9000 + i as u32))
            .collect();
        self.make_batch(transactions)
    }

    /// Run a full populate with this fixture's keypair and a seeded
    /// synthetic word source, writing the artifact to `path`.
    pub fn populate_to(
        &self,
        path: impl AsRef<Path>,
        pool_size: usize,
    ) -> Result<PopulateSummary, ForgeError> {
        let config = PopulateConfig::new(pool_size, path.as_ref());
        let mut words = SyntheticWords::with_rng(StdRng::seed_from_u64(pool_size as u64));
        populate_with(&config, &self.keypair, &mut words)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures for multi-signer tests.
pub fn multi_signer_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[0] = i as u8;
            TestFixture::with_seed(seed)
        })
        .collect()
}
