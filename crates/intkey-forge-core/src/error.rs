//! Error types for intkey-forge-core.

use thiserror::Error;

/// Core errors that can occur while encoding or decoding wire entities.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("invalid public key")]
    InvalidPublicKey,

    #[error("malformed address: {0}")]
    MalformedAddress(String),

    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    #[error("malformed batch: {0}")]
    MalformedBatch(String),

    #[error("decoding error: {0}")]
    DecodingError(String),
}

/// Validation errors for transactions and batches.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("signature verification failed")]
    SignatureFailed,

    #[error("payload hash does not match header commitment")]
    PayloadHashMismatch,

    #[error("derived address {0} is not declared in header inputs/outputs")]
    AddressNotDeclared(String),

    #[error("transaction id at position {index} does not match batch header")]
    TransactionIdMismatch { index: usize },

    #[error("batch header lists {header} transaction ids but batch carries {actual}")]
    TransactionCountMismatch { header: usize, actual: usize },

    #[error("unsupported family: {name} {version}")]
    UnsupportedFamily { name: String, version: String },

    #[error("unsupported payload content type: {0}")]
    UnsupportedContentType(String),

    #[error("structural error: {0}")]
    StructuralError(String),
}

impl From<CoreError> for ValidationError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidSignature | CoreError::InvalidPublicKey => {
                ValidationError::SignatureFailed
            }
            CoreError::MalformedAddress(msg)
            | CoreError::MalformedPayload(msg)
            | CoreError::MalformedTransaction(msg)
            | CoreError::MalformedBatch(msg)
            | CoreError::DecodingError(msg) => ValidationError::StructuralError(msg),
        }
    }
}
