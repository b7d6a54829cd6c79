//! # intkey-forge
//!
//! An offline generator of signed intkey transaction batches for
//! ledger load-testing.
//!
//! ## Overview
//!
//! A populate run fabricates `pool_size` signed "set key=value"
//! transactions, groups them into one signed batch, wraps that in a
//! batch list, and writes the canonical bytes to an artifact file for
//! later submission by some other component. It is not a consensus
//! engine, not a ledger, and not a networked client.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use intkey_forge::{populate, PopulateConfig};
//!
//! let config = PopulateConfig::new(100, "batches.intkey");
//! let summary = populate(&config).unwrap();
//! println!("{} transactions", summary.transaction_count);
//! ```
//!
//! For reproducible fixtures, inject the signer and word source:
//!
//! ```rust,no_run
//! use intkey_forge::core::Keypair;
//! use intkey_forge::words::SyntheticWords;
//! use intkey_forge::{populate_with, PopulateConfig};
//!
//! let config = PopulateConfig::new(3, "out.intkey");
//! let keypair = Keypair::from_seed(&[0x42; 32]);
//! let mut words = SyntheticWords::new();
//! populate_with(&config, &keypair, &mut words).unwrap();
//! ```

pub mod error;
pub mod generator;
pub mod words;

// Re-export the core crate
pub use intkey_forge_core as core;

// Re-export main types for convenience
pub use error::ForgeError;
pub use generator::{
    populate, populate_with, read_batch_list, PopulateConfig, PopulateSummary, VALUE_MAX,
    VALUE_MIN,
};
pub use words::{DictionaryWords, FallbackWords, SyntheticWords, WordSource};

// Re-export commonly used core types
pub use intkey_forge_core::{
    Address, Batch, BatchBuilder, BatchHeader, BatchList, IntkeyPayload, Keypair, Transaction,
    TransactionBuilder, TransactionId, Verb,
};
