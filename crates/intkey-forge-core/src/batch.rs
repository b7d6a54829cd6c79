//! Batch: a signed, ordered group of transactions.
//!
//! The batch header lists transaction ids in the exact order the
//! transactions were supplied. That order is semantically significant:
//! it fixes the application order within the batch.

use crate::canonical;
use crate::crypto::{Ed25519PublicKey, Ed25519Signature, Keypair};
use crate::error::CoreError;
use crate::transaction::Transaction;
use crate::types::TransactionId;

/// The header of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchHeader {
    /// The batch signer's public key.
    pub signer_public_key: Ed25519PublicKey,

    /// Ids of the contained transactions, in application order.
    pub transaction_ids: Vec<TransactionId>,
}

/// A complete batch: header + transactions + header signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// The signed header.
    pub header: BatchHeader,

    /// The contained transactions, in the order the header lists them.
    pub transactions: Vec<Transaction>,

    /// Ed25519 signature over the canonical header bytes.
    pub header_signature: Ed25519Signature,
}

impl Batch {
    /// The canonical header bytes the signature covers.
    pub fn header_bytes(&self) -> Vec<u8> {
        canonical::batch_header_bytes(&self.header)
    }

    /// Number of transactions in the batch.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Encode the full envelope to canonical wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        canonical::batch_bytes(self)
    }
}

/// Builder for creating signed batches.
///
/// No cross-transaction consistency is checked here: the caller is
/// trusted to supply transactions the receiving validator will accept.
pub struct BatchBuilder {
    transactions: Vec<Transaction>,
}

impl BatchBuilder {
    /// Start building a batch from transactions in application order.
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Append one more transaction.
    pub fn push(mut self, transaction: Transaction) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Build and sign the batch.
    pub fn sign(self, keypair: &Keypair) -> Batch {
        let transaction_ids = self.transactions.iter().map(|t| t.id()).collect();

        let header = BatchHeader {
            signer_public_key: keypair.public_key(),
            transaction_ids,
        };

        let header_bytes = canonical::batch_header_bytes(&header);
        let header_signature = keypair.sign(&header_bytes);

        Batch {
            header,
            transactions: self.transactions,
            header_signature,
        }
    }
}

/// The top-level wire container: an ordered sequence of batches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchList {
    /// The contained batches.
    pub batches: Vec<Batch>,
}

impl BatchList {
    /// Create a batch list.
    pub fn new(batches: Vec<Batch>) -> Self {
        Self { batches }
    }

    /// Number of batches.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Total number of transactions across all batches.
    pub fn transaction_count(&self) -> usize {
        self.batches.iter().map(Batch::len).sum()
    }

    /// Encode to the canonical wire bytes written to the artifact file.
    pub fn to_bytes(&self) -> Vec<u8> {
        canonical::batch_list_bytes(self)
    }

    /// Decode from wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        canonical::decode_batch_list(bytes)
    }
}
