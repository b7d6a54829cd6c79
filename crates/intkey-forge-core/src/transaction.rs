//! Transaction: a signed intkey instruction.
//!
//! A transaction is immutable once signed. The header commits to the
//! payload by hash and declares the state addresses the instruction
//! reads and writes; the header signature covers exactly the canonical
//! header bytes and doubles as the transaction id.

use bytes::Bytes;

use crate::address::Address;
use crate::canonical;
use crate::crypto::{Ed25519PublicKey, Ed25519Signature, Keypair, Sha512Hash};
use crate::payload::IntkeyPayload;
use crate::types::TransactionId;

/// The transaction family this generator targets.
pub const FAMILY_NAME: &str = "intkey";

/// The family version understood by the receiving validator.
pub const FAMILY_VERSION: &str = "1.0";

/// Content type tag of the payload encoding.
pub const PAYLOAD_CONTENT_TYPE: &str = "application/cbor";

/// The header of a transaction, containing all signed metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionHeader {
    /// The signer's public key (32 bytes).
    pub signer_public_key: Ed25519PublicKey,

    /// Transaction family name.
    pub family_name: String,

    /// Transaction family version.
    pub family_version: String,

    /// State addresses the transaction reads.
    pub inputs: Vec<Address>,

    /// State addresses the transaction writes.
    pub outputs: Vec<Address>,

    /// Transactions that must be applied before this one (empty for
    /// generated load-test transactions).
    pub dependencies: Vec<TransactionId>,

    /// Content type tag of the payload encoding.
    pub payload_content_type: String,

    /// SHA-512 hash of the payload bytes.
    pub payload_sha512: Sha512Hash,

    /// Public key of the party expected to batch this transaction.
    pub batcher_public_key: Ed25519PublicKey,
}

/// A complete transaction: header + payload + header signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The signed header.
    pub header: TransactionHeader,

    /// The payload bytes the header commits to.
    pub payload: Bytes,

    /// Ed25519 signature over the canonical header bytes.
    pub header_signature: Ed25519Signature,
}

impl Transaction {
    /// The canonical header bytes the signature covers.
    pub fn header_bytes(&self) -> Vec<u8> {
        canonical::transaction_header_bytes(&self.header)
    }

    /// The transaction id (the header signature).
    pub fn id(&self) -> TransactionId {
        TransactionId(self.header_signature.0)
    }

    /// The signer's public key.
    pub fn signer(&self) -> &Ed25519PublicKey {
        &self.header.signer_public_key
    }

    /// Encode the full envelope to canonical wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        canonical::transaction_bytes(self)
    }
}

/// Builder for creating signed transactions.
pub struct TransactionBuilder {
    payload: IntkeyPayload,
    dependencies: Vec<TransactionId>,
    batcher_public_key: Option<Ed25519PublicKey>,
}

impl TransactionBuilder {
    /// Start building a transaction for the given payload.
    pub fn new(payload: IntkeyPayload) -> Self {
        Self {
            payload,
            dependencies: Vec::new(),
            batcher_public_key: None,
        }
    }

    /// Add a dependency that must be applied before this transaction.
    pub fn dependency(mut self, id: TransactionId) -> Self {
        self.dependencies.push(id);
        self
    }

    /// Set the batcher public key. Defaults to the signer's own key
    /// (self-batching).
    pub fn batcher(mut self, public_key: Ed25519PublicKey) -> Self {
        self.batcher_public_key = Some(public_key);
        self
    }

    /// Build and sign the transaction.
    ///
    /// The derived state address is declared as both input and output,
    /// since a `set` reads and writes the same entry.
    pub fn sign(self, keypair: &Keypair) -> Transaction {
        let signer = keypair.public_key();
        let batcher = self.batcher_public_key.unwrap_or(signer);
        let address = Address::derive(self.payload.name());

        let header = TransactionHeader {
            signer_public_key: signer,
            family_name: FAMILY_NAME.to_string(),
            family_version: FAMILY_VERSION.to_string(),
            inputs: vec![address.clone()],
            outputs: vec![address],
            dependencies: self.dependencies,
            payload_content_type: PAYLOAD_CONTENT_TYPE.to_string(),
            payload_sha512: self.payload.sha512(),
            batcher_public_key: batcher,
        };

        let header_bytes = canonical::transaction_header_bytes(&header);
        let header_signature = keypair.sign(&header_bytes);

        Transaction {
            header,
            payload: self.payload.to_bytes().clone(),
            header_signature,
        }
    }
}
