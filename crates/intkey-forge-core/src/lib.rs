//! # intkey-forge-core
//!
//! Pure primitives for intkey-forge: payloads, transactions, batches,
//! and canonicalization.
//!
//! This crate contains no I/O. It is pure computation over
//! cryptographic data structures.
//!
//! ## Key Types
//!
//! - [`IntkeyPayload`] - An immutable `{Verb, Name, Value}` instruction
//! - [`Transaction`] - A signed instruction; its header signature is its id
//! - [`Batch`] - A signed, ordered group of transactions
//! - [`BatchList`] - The top-level container written to the artifact file
//! - [`Address`] - A derived, namespace-scoped state address
//!
//! ## Canonicalization
//!
//! All wire structures are encoded as deterministic CBOR. Header
//! signatures cover exactly the canonical header bytes. See
//! [`canonical`] module.

pub mod address;
pub mod batch;
pub mod canonical;
pub mod crypto;
pub mod error;
pub mod payload;
pub mod transaction;
pub mod types;
pub mod validation;

pub use address::{namespace_prefix, Address};
pub use batch::{Batch, BatchBuilder, BatchHeader, BatchList};
pub use canonical::{
    batch_header_bytes, batch_list_bytes, decode_batch_list, decode_transaction,
    transaction_header_bytes,
};
pub use crypto::{Ed25519PublicKey, Ed25519Signature, Keypair, Sha512Hash};
pub use error::{CoreError, ValidationError};
pub use payload::{IntkeyPayload, Verb};
pub use transaction::{
    Transaction, TransactionBuilder, TransactionHeader, FAMILY_NAME, FAMILY_VERSION,
    PAYLOAD_CONTENT_TYPE,
};
pub use types::TransactionId;
pub use validation::{validate_batch, validate_transaction};
