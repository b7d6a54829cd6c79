//! # intkey-forge-testkit
//!
//! Testing utilities for intkey-forge.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Helper structs for setting up signed transactions
//!   and batches in tests
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Test Fixtures
//!
//! Quickly set up test scenarios:
//!
//! ```rust
//! use intkey_forge_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::with_seed([0x42; 32]);
//! let batch = fixture.make_populated_batch(&["alpha", "beta"]);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use intkey_forge_testkit::generators::{transaction_from_params, TransactionParams};
//!
//! proptest! {
//!     #[test]
//!     fn transaction_id_is_deterministic(params: TransactionParams) {
//!         let t1 = transaction_from_params(&params);
//!         let t2 = transaction_from_params(&params);
//!         prop_assert_eq!(t1.id(), t2.id());
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{multi_signer_fixtures, TestFixture};
pub use generators::{
    batch_from_params, payload_from_params, transaction_from_params, TransactionParams,
};
