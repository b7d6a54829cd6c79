//! Transaction and batch validation: signature verification and
//! structural checks, mirroring what a receiving validator performs.

use crate::address::Address;
use crate::batch::Batch;
use crate::crypto::Sha512Hash;
use crate::error::ValidationError;
use crate::payload::IntkeyPayload;
use crate::transaction::{Transaction, FAMILY_NAME, FAMILY_VERSION, PAYLOAD_CONTENT_TYPE};

/// Validate a transaction in isolation.
///
/// This performs:
/// - Family and content-type checks
/// - Payload hash verification against the header commitment
/// - Payload decoding and address-declaration check
/// - Header signature verification
pub fn validate_transaction(transaction: &Transaction) -> Result<(), ValidationError> {
    // 1. Check the family is one this validator understands
    if transaction.header.family_name != FAMILY_NAME
        || transaction.header.family_version != FAMILY_VERSION
    {
        return Err(ValidationError::UnsupportedFamily {
            name: transaction.header.family_name.clone(),
            version: transaction.header.family_version.clone(),
        });
    }

    if transaction.header.payload_content_type != PAYLOAD_CONTENT_TYPE {
        return Err(ValidationError::UnsupportedContentType(
            transaction.header.payload_content_type.clone(),
        ));
    }

    // 2. Verify payload hash
    let computed_hash = Sha512Hash::hash(&transaction.payload);
    if computed_hash != transaction.header.payload_sha512 {
        return Err(ValidationError::PayloadHashMismatch);
    }

    // 3. Payload must decode, and its derived address must be declared
    let payload = IntkeyPayload::from_bytes(&transaction.payload)?;
    let address = Address::derive(payload.name());
    if !transaction.header.inputs.contains(&address)
        || !transaction.header.outputs.contains(&address)
    {
        return Err(ValidationError::AddressNotDeclared(address.to_string()));
    }

    // 4. Verify signature over the canonical header bytes
    transaction
        .header
        .signer_public_key
        .verify(&transaction.header_bytes(), &transaction.header_signature)
        .map_err(|_| ValidationError::SignatureFailed)?;

    Ok(())
}

/// Validate a batch and every transaction in it.
///
/// This performs:
/// - Header id sequence vs embedded transaction order
/// - Batch signature verification
/// - Per-transaction validation
pub fn validate_batch(batch: &Batch) -> Result<(), ValidationError> {
    // 1. Id sequence must match the embedded transactions, in order
    if batch.header.transaction_ids.len() != batch.transactions.len() {
        return Err(ValidationError::TransactionCountMismatch {
            header: batch.header.transaction_ids.len(),
            actual: batch.transactions.len(),
        });
    }

    for (index, (id, transaction)) in batch
        .header
        .transaction_ids
        .iter()
        .zip(&batch.transactions)
        .enumerate()
    {
        if *id != transaction.id() {
            return Err(ValidationError::TransactionIdMismatch { index });
        }
    }

    // 2. Verify the batch signature
    batch
        .header
        .signer_public_key
        .verify(&batch.header_bytes(), &batch.header_signature)
        .map_err(|_| ValidationError::SignatureFailed)?;

    // 3. Validate each transaction
    for transaction in &batch.transactions {
        validate_transaction(transaction)?;
    }

    Ok(())
}
