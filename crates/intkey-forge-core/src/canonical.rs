//! Canonical CBOR encoding for deterministic serialization.
//!
//! This module implements RFC 8949 Core Deterministic Encoding:
//! - Map keys sorted by encoded byte comparison
//! - Integers use smallest valid encoding
//! - Definite lengths only
//! - No floats
//!
//! The canonical encoding is critical: header signatures cover exactly
//! the encoded header bytes, so the same logical header must produce
//! identical bytes on every platform or signature verification at the
//! receiving validator breaks.

use ciborium::value::Value;

use crate::batch::{Batch, BatchHeader, BatchList};
use crate::crypto::{Ed25519PublicKey, Ed25519Signature, Sha512Hash};
use crate::error::CoreError;
use crate::transaction::{Transaction, TransactionHeader};
use crate::types::TransactionId;

/// Transaction header field keys (integer keys for compact encoding).
///
/// Keys 0-23 encode as single bytes in CBOR.
mod txn_keys {
    pub const SIGNER_PUBLIC_KEY: u64 = 0;
    pub const FAMILY_NAME: u64 = 1;
    pub const FAMILY_VERSION: u64 = 2;
    pub const INPUTS: u64 = 3;
    pub const OUTPUTS: u64 = 4;
    pub const DEPENDENCIES: u64 = 5;
    pub const PAYLOAD_CONTENT_TYPE: u64 = 6;
    pub const PAYLOAD_SHA512: u64 = 7;
    pub const BATCHER_PUBLIC_KEY: u64 = 8;
}

/// Batch header field keys.
mod batch_keys {
    pub const SIGNER_PUBLIC_KEY: u64 = 0;
    pub const TRANSACTION_IDS: u64 = 1;
}

/// Envelope field keys, shared by Transaction and Batch.
///
/// BODY is the payload bytes for a transaction and the nested
/// transaction array for a batch.
mod envelope_keys {
    pub const HEADER: u64 = 0;
    pub const BODY: u64 = 1;
    pub const HEADER_SIGNATURE: u64 = 2;
}

/// Batch list field keys.
mod list_keys {
    pub const BATCHES: u64 = 0;
}

/// Encode a transaction header to canonical CBOR bytes.
///
/// These are the bytes the header signature covers.
pub fn transaction_header_bytes(header: &TransactionHeader) -> Vec<u8> {
    encode_value(&transaction_header_to_value(header))
}

/// Encode a batch header to canonical CBOR bytes.
pub fn batch_header_bytes(header: &BatchHeader) -> Vec<u8> {
    encode_value(&batch_header_to_value(header))
}

/// Encode a full transaction envelope to canonical bytes.
pub fn transaction_bytes(transaction: &Transaction) -> Vec<u8> {
    encode_value(&transaction_to_value(transaction))
}

/// Encode a full batch envelope to canonical bytes.
pub fn batch_bytes(batch: &Batch) -> Vec<u8> {
    encode_value(&batch_to_value(batch))
}

/// Encode a batch list to canonical bytes.
///
/// This is the top-level wire format written to the artifact file.
pub fn batch_list_bytes(list: &BatchList) -> Vec<u8> {
    let batches: Vec<Value> = list.batches.iter().map(batch_to_value).collect();
    let entries = vec![(Value::Integer(list_keys::BATCHES.into()), Value::Array(batches))];
    encode_value(&Value::Map(entries))
}

fn transaction_header_to_value(header: &TransactionHeader) -> Value {
    let inputs: Vec<Value> = header
        .inputs
        .iter()
        .map(|a| Value::Text(a.as_str().to_string()))
        .collect();
    let outputs: Vec<Value> = header
        .outputs
        .iter()
        .map(|a| Value::Text(a.as_str().to_string()))
        .collect();
    let dependencies: Vec<Value> = header
        .dependencies
        .iter()
        .map(|d| Value::Bytes(d.0.to_vec()))
        .collect();

    // Build map entries in key order (already sorted 0-8)
    let entries = vec![
        (
            Value::Integer(txn_keys::SIGNER_PUBLIC_KEY.into()),
            Value::Bytes(header.signer_public_key.0.to_vec()),
        ),
        (
            Value::Integer(txn_keys::FAMILY_NAME.into()),
            Value::Text(header.family_name.clone()),
        ),
        (
            Value::Integer(txn_keys::FAMILY_VERSION.into()),
            Value::Text(header.family_version.clone()),
        ),
        (Value::Integer(txn_keys::INPUTS.into()), Value::Array(inputs)),
        (Value::Integer(txn_keys::OUTPUTS.into()), Value::Array(outputs)),
        (
            Value::Integer(txn_keys::DEPENDENCIES.into()),
            Value::Array(dependencies),
        ),
        (
            Value::Integer(txn_keys::PAYLOAD_CONTENT_TYPE.into()),
            Value::Text(header.payload_content_type.clone()),
        ),
        (
            Value::Integer(txn_keys::PAYLOAD_SHA512.into()),
            Value::Bytes(header.payload_sha512.0.to_vec()),
        ),
        (
            Value::Integer(txn_keys::BATCHER_PUBLIC_KEY.into()),
            Value::Bytes(header.batcher_public_key.0.to_vec()),
        ),
    ];

    Value::Map(entries)
}

fn batch_header_to_value(header: &BatchHeader) -> Value {
    let ids: Vec<Value> = header
        .transaction_ids
        .iter()
        .map(|id| Value::Bytes(id.0.to_vec()))
        .collect();

    let entries = vec![
        (
            Value::Integer(batch_keys::SIGNER_PUBLIC_KEY.into()),
            Value::Bytes(header.signer_public_key.0.to_vec()),
        ),
        (
            Value::Integer(batch_keys::TRANSACTION_IDS.into()),
            Value::Array(ids),
        ),
    ];

    Value::Map(entries)
}

fn transaction_to_value(transaction: &Transaction) -> Value {
    let entries = vec![
        (
            Value::Integer(envelope_keys::HEADER.into()),
            Value::Bytes(transaction.header_bytes()),
        ),
        (
            Value::Integer(envelope_keys::BODY.into()),
            Value::Bytes(transaction.payload.to_vec()),
        ),
        (
            Value::Integer(envelope_keys::HEADER_SIGNATURE.into()),
            Value::Bytes(transaction.header_signature.0.to_vec()),
        ),
    ];

    Value::Map(entries)
}

fn batch_to_value(batch: &Batch) -> Value {
    let transactions: Vec<Value> = batch.transactions.iter().map(transaction_to_value).collect();

    let entries = vec![
        (
            Value::Integer(envelope_keys::HEADER.into()),
            Value::Bytes(batch.header_bytes()),
        ),
        (
            Value::Integer(envelope_keys::BODY.into()),
            Value::Array(transactions),
        ),
        (
            Value::Integer(envelope_keys::HEADER_SIGNATURE.into()),
            Value::Bytes(batch.header_signature.0.to_vec()),
        ),
    ];

    Value::Map(entries)
}

/// Encode a CBOR Value to canonical bytes.
pub(crate) fn encode_value(value: &Value) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_value_to(&mut buf, value);
    buf
}

/// Recursively encode a CBOR value.
fn encode_value_to(buf: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Integer(i) => {
            encode_integer(buf, *i);
        }
        Value::Bytes(b) => {
            encode_bytes(buf, b);
        }
        Value::Text(s) => {
            encode_text(buf, s);
        }
        Value::Array(arr) => {
            encode_array(buf, arr);
        }
        Value::Map(entries) => {
            encode_map_canonical(buf, entries);
        }
        Value::Bool(b) => {
            buf.push(if *b { 0xf5 } else { 0xf4 });
        }
        Value::Null => {
            buf.push(0xf6);
        }
        Value::Float(_) => {
            panic!("floats not supported in canonical encoding");
        }
        _ => {
            panic!("unsupported CBOR value type");
        }
    }
}

/// Encode a CBOR integer (major types 0 and 1).
fn encode_integer(buf: &mut Vec<u8>, i: ciborium::value::Integer) {
    let n: i128 = i.into();

    if n >= 0 {
        // Major type 0: unsigned integer
        encode_uint(buf, 0, n as u64);
    } else {
        // Major type 1: negative integer
        // CBOR encodes -1 as 0, -2 as 1, etc.
        let abs = (-1 - n) as u64;
        encode_uint(buf, 1, abs);
    }
}

/// Encode an unsigned integer with the given major type.
fn encode_uint(buf: &mut Vec<u8>, major: u8, n: u64) {
    let mt = major << 5;
    if n < 24 {
        buf.push(mt | (n as u8));
    } else if n <= 0xff {
        buf.push(mt | 24);
        buf.push(n as u8);
    } else if n <= 0xffff {
        buf.push(mt | 25);
        buf.extend_from_slice(&(n as u16).to_be_bytes());
    } else if n <= 0xffffffff {
        buf.push(mt | 26);
        buf.extend_from_slice(&(n as u32).to_be_bytes());
    } else {
        buf.push(mt | 27);
        buf.extend_from_slice(&n.to_be_bytes());
    }
}

/// Encode a byte string (major type 2).
fn encode_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    encode_uint(buf, 2, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

/// Encode a text string (major type 3).
fn encode_text(buf: &mut Vec<u8>, s: &str) {
    encode_uint(buf, 3, s.len() as u64);
    buf.extend_from_slice(s.as_bytes());
}

/// Encode an array (major type 4).
fn encode_array(buf: &mut Vec<u8>, arr: &[Value]) {
    encode_uint(buf, 4, arr.len() as u64);
    for item in arr {
        encode_value_to(buf, item);
    }
}

/// Encode a map canonically (major type 5).
///
/// Keys are sorted by their encoded byte comparison.
fn encode_map_canonical(buf: &mut Vec<u8>, entries: &[(Value, Value)]) {
    // Encode all keys first to sort by encoded bytes
    let mut key_value_pairs: Vec<(Vec<u8>, &Value)> = entries
        .iter()
        .map(|(k, v)| {
            let mut key_buf = Vec::new();
            encode_value_to(&mut key_buf, k);
            (key_buf, v)
        })
        .collect();

    // Sort by encoded key bytes (lexicographic)
    key_value_pairs.sort_by(|a, b| a.0.cmp(&b.0));

    // Write map header
    encode_uint(buf, 5, key_value_pairs.len() as u64);

    // Write sorted key-value pairs
    for (key_bytes, value) in key_value_pairs {
        buf.extend_from_slice(&key_bytes);
        encode_value_to(buf, value);
    }
}

/// Decode a batch list from canonical bytes.
pub fn decode_batch_list(bytes: &[u8]) -> Result<BatchList, CoreError> {
    let cursor = std::io::Cursor::new(bytes);
    let value: Value =
        ciborium::from_reader(cursor).map_err(|e| CoreError::DecodingError(e.to_string()))?;

    let map = as_map(&value).ok_or_else(|| CoreError::MalformedBatch("expected map".into()))?;

    let batches = match map_get(map, list_keys::BATCHES) {
        Some(Value::Array(arr)) => arr
            .iter()
            .map(batch_from_value)
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(CoreError::MalformedBatch("missing batches".into())),
    };

    Ok(BatchList { batches })
}

/// Decode a single transaction envelope from canonical bytes.
pub fn decode_transaction(bytes: &[u8]) -> Result<Transaction, CoreError> {
    let cursor = std::io::Cursor::new(bytes);
    let value: Value =
        ciborium::from_reader(cursor).map_err(|e| CoreError::DecodingError(e.to_string()))?;
    transaction_from_value(&value)
}

fn batch_from_value(value: &Value) -> Result<Batch, CoreError> {
    let map = as_map(value).ok_or_else(|| CoreError::MalformedBatch("expected map".into()))?;

    let header_bytes = match map_get(map, envelope_keys::HEADER) {
        Some(Value::Bytes(b)) => b.as_slice(),
        _ => return Err(CoreError::MalformedBatch("missing header".into())),
    };

    let header = batch_header_from_bytes(header_bytes)?;

    // The signature covers the embedded header bytes, and the in-memory
    // batch re-encodes its header on demand. Reject anything that would
    // not round-trip to the same bytes.
    if self::batch_header_bytes(&header) != header_bytes {
        return Err(CoreError::MalformedBatch("non-canonical header encoding".into()));
    }

    let transactions = match map_get(map, envelope_keys::BODY) {
        Some(Value::Array(arr)) => arr
            .iter()
            .map(transaction_from_value)
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(CoreError::MalformedBatch("missing transactions".into())),
    };

    let header_signature = match map_get(map, envelope_keys::HEADER_SIGNATURE) {
        Some(Value::Bytes(b)) if b.len() == 64 => {
            let mut arr = [0u8; 64];
            arr.copy_from_slice(b);
            Ed25519Signature(arr)
        }
        _ => return Err(CoreError::MalformedBatch("invalid header signature".into())),
    };

    Ok(Batch {
        header,
        transactions,
        header_signature,
    })
}

fn transaction_from_value(value: &Value) -> Result<Transaction, CoreError> {
    let map =
        as_map(value).ok_or_else(|| CoreError::MalformedTransaction("expected map".into()))?;

    let header_bytes = match map_get(map, envelope_keys::HEADER) {
        Some(Value::Bytes(b)) => b.as_slice(),
        _ => return Err(CoreError::MalformedTransaction("missing header".into())),
    };

    let header = transaction_header_from_bytes(header_bytes)?;

    if self::transaction_header_bytes(&header) != header_bytes {
        return Err(CoreError::MalformedTransaction(
            "non-canonical header encoding".into(),
        ));
    }

    let payload = match map_get(map, envelope_keys::BODY) {
        Some(Value::Bytes(b)) => b.clone(),
        _ => return Err(CoreError::MalformedTransaction("missing payload".into())),
    };

    let header_signature = match map_get(map, envelope_keys::HEADER_SIGNATURE) {
        Some(Value::Bytes(b)) if b.len() == 64 => {
            let mut arr = [0u8; 64];
            arr.copy_from_slice(b);
            Ed25519Signature(arr)
        }
        _ => {
            return Err(CoreError::MalformedTransaction(
                "invalid header signature".into(),
            ))
        }
    };

    Ok(Transaction {
        header,
        payload: payload.into(),
        header_signature,
    })
}

fn transaction_header_from_bytes(bytes: &[u8]) -> Result<TransactionHeader, CoreError> {
    let cursor = std::io::Cursor::new(bytes);
    let value: Value =
        ciborium::from_reader(cursor).map_err(|e| CoreError::DecodingError(e.to_string()))?;

    let map = as_map(&value)
        .ok_or_else(|| CoreError::MalformedTransaction("header: expected map".into()))?;

    let signer_public_key = get_public_key(map, txn_keys::SIGNER_PUBLIC_KEY)
        .ok_or_else(|| CoreError::MalformedTransaction("invalid signer public key".into()))?;

    let family_name = get_text(map, txn_keys::FAMILY_NAME)
        .ok_or_else(|| CoreError::MalformedTransaction("missing family name".into()))?;

    let family_version = get_text(map, txn_keys::FAMILY_VERSION)
        .ok_or_else(|| CoreError::MalformedTransaction("missing family version".into()))?;

    let inputs = get_addresses(map, txn_keys::INPUTS)
        .ok_or_else(|| CoreError::MalformedTransaction("invalid inputs".into()))?;

    let outputs = get_addresses(map, txn_keys::OUTPUTS)
        .ok_or_else(|| CoreError::MalformedTransaction("invalid outputs".into()))?;

    let dependencies = match map_get(map, txn_keys::DEPENDENCIES) {
        Some(Value::Array(arr)) => {
            let mut deps = Vec::with_capacity(arr.len());
            for item in arr {
                match item {
                    Value::Bytes(b) if b.len() == 64 => {
                        let mut id = [0u8; 64];
                        id.copy_from_slice(b);
                        deps.push(TransactionId(id));
                    }
                    _ => {
                        return Err(CoreError::MalformedTransaction("invalid dependency".into()));
                    }
                }
            }
            deps
        }
        None => Vec::new(),
        _ => return Err(CoreError::MalformedTransaction("invalid dependencies".into())),
    };

    let payload_content_type = get_text(map, txn_keys::PAYLOAD_CONTENT_TYPE)
        .ok_or_else(|| CoreError::MalformedTransaction("missing payload content type".into()))?;

    let payload_sha512 = match map_get(map, txn_keys::PAYLOAD_SHA512) {
        Some(Value::Bytes(b)) if b.len() == 64 => {
            let mut arr = [0u8; 64];
            arr.copy_from_slice(b);
            Sha512Hash(arr)
        }
        _ => return Err(CoreError::MalformedTransaction("invalid payload hash".into())),
    };

    let batcher_public_key = get_public_key(map, txn_keys::BATCHER_PUBLIC_KEY)
        .ok_or_else(|| CoreError::MalformedTransaction("invalid batcher public key".into()))?;

    Ok(TransactionHeader {
        signer_public_key,
        family_name,
        family_version,
        inputs,
        outputs,
        dependencies,
        payload_content_type,
        payload_sha512,
        batcher_public_key,
    })
}

fn batch_header_from_bytes(bytes: &[u8]) -> Result<BatchHeader, CoreError> {
    let cursor = std::io::Cursor::new(bytes);
    let value: Value =
        ciborium::from_reader(cursor).map_err(|e| CoreError::DecodingError(e.to_string()))?;

    let map =
        as_map(&value).ok_or_else(|| CoreError::MalformedBatch("header: expected map".into()))?;

    let signer_public_key = get_public_key(map, batch_keys::SIGNER_PUBLIC_KEY)
        .ok_or_else(|| CoreError::MalformedBatch("invalid signer public key".into()))?;

    let transaction_ids = match map_get(map, batch_keys::TRANSACTION_IDS) {
        Some(Value::Array(arr)) => {
            let mut ids = Vec::with_capacity(arr.len());
            for item in arr {
                match item {
                    Value::Bytes(b) if b.len() == 64 => {
                        let mut id = [0u8; 64];
                        id.copy_from_slice(b);
                        ids.push(TransactionId(id));
                    }
                    _ => return Err(CoreError::MalformedBatch("invalid transaction id".into())),
                }
            }
            ids
        }
        _ => return Err(CoreError::MalformedBatch("missing transaction ids".into())),
    };

    Ok(BatchHeader {
        signer_public_key,
        transaction_ids,
    })
}

fn as_map(value: &Value) -> Option<&[(Value, Value)]> {
    match value {
        Value::Map(m) => Some(m),
        _ => None,
    }
}

/// Look up a value by integer key.
fn map_get<'a>(map: &'a [(Value, Value)], key: u64) -> Option<&'a Value> {
    map.iter()
        .find(|(k, _)| matches!(k, Value::Integer(i) if i128::from(*i) == key as i128))
        .map(|(_, v)| v)
}

fn get_text(map: &[(Value, Value)], key: u64) -> Option<String> {
    match map_get(map, key) {
        Some(Value::Text(s)) => Some(s.clone()),
        _ => None,
    }
}

fn get_public_key(map: &[(Value, Value)], key: u64) -> Option<Ed25519PublicKey> {
    match map_get(map, key) {
        Some(Value::Bytes(b)) if b.len() == 32 => {
            let mut arr = [0u8; 32];
            arr.copy_from_slice(b);
            Some(Ed25519PublicKey(arr))
        }
        _ => None,
    }
}

fn get_addresses(map: &[(Value, Value)], key: u64) -> Option<Vec<crate::address::Address>> {
    match map_get(map, key) {
        Some(Value::Array(arr)) => {
            let mut addrs = Vec::with_capacity(arr.len());
            for item in arr {
                match item {
                    Value::Text(s) => addrs.push(crate::address::Address::parse(s).ok()?),
                    _ => return None,
                }
            }
            Some(addrs)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::BatchBuilder;
    use crate::crypto::Keypair;
    use crate::payload::{IntkeyPayload, Verb};
    use crate::transaction::TransactionBuilder;

    fn make_transaction(keypair: &Keypair, name: &str, value: u32) -> Transaction {
        TransactionBuilder::new(IntkeyPayload::new(Verb::Set, name, value)).sign(keypair)
    }

    #[test]
    fn test_header_bytes_deterministic() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let txn = make_transaction(&keypair, "alpha", 9000);

        let b1 = transaction_header_bytes(&txn.header);
        let b2 = transaction_header_bytes(&txn.header);
        assert_eq!(b1, b2);
    }

    #[test]
    fn test_integer_encoding() {
        // Test smallest encoding for various integer sizes
        let mut buf = Vec::new();

        // 0-23: single byte
        encode_uint(&mut buf, 0, 0);
        assert_eq!(buf, vec![0x00]);

        buf.clear();
        encode_uint(&mut buf, 0, 23);
        assert_eq!(buf, vec![0x17]);

        // 24-255: two bytes
        buf.clear();
        encode_uint(&mut buf, 0, 24);
        assert_eq!(buf, vec![0x18, 24]);

        buf.clear();
        encode_uint(&mut buf, 0, 255);
        assert_eq!(buf, vec![0x18, 255]);

        // 256-65535: three bytes
        buf.clear();
        encode_uint(&mut buf, 0, 256);
        assert_eq!(buf, vec![0x19, 0x01, 0x00]);

        buf.clear();
        encode_uint(&mut buf, 0, 65535);
        assert_eq!(buf, vec![0x19, 0xff, 0xff]);
    }

    #[test]
    fn test_map_key_ordering() {
        // Ensure integer keys are sorted correctly
        let mut buf = Vec::new();
        let entries = vec![
            (Value::Integer(8.into()), Value::Integer(80.into())),
            (Value::Integer(0.into()), Value::Integer(0.into())),
            (Value::Integer(5.into()), Value::Integer(50.into())),
        ];
        encode_map_canonical(&mut buf, &entries);

        // Map header (3 entries)
        assert_eq!(buf[0], 0xa3);
        // Keys should be in order: 0, 5, 8
        assert_eq!(buf[1], 0x00); // key 0
        assert_eq!(buf[2], 0x00); // value 0
        assert_eq!(buf[3], 0x05); // key 5
        assert_eq!(buf[4], 0x18); // value 50 (>23)
        assert_eq!(buf[5], 50);
        assert_eq!(buf[6], 0x08); // key 8
        assert_eq!(buf[7], 0x18); // value 80 (>23)
        assert_eq!(buf[8], 80);
    }

    #[test]
    fn test_text_key_ordering() {
        // RFC 8949 sorts by encoded bytes: shorter text keys first.
        let mut buf = Vec::new();
        let entries = vec![
            (Value::Text("Value".into()), Value::Integer(1.into())),
            (Value::Text("Verb".into()), Value::Integer(2.into())),
            (Value::Text("Name".into()), Value::Integer(3.into())),
        ];
        encode_map_canonical(&mut buf, &entries);

        assert_eq!(buf[0], 0xa3);
        // "Name" (0x64 + 4 bytes) < "Verb" (0x64) < "Value" (0x65)
        assert_eq!(&buf[1..6], &[0x64, b'N', b'a', b'm', b'e']);
        assert_eq!(buf[6], 3);
        assert_eq!(&buf[7..12], &[0x64, b'V', b'e', b'r', b'b']);
        assert_eq!(buf[12], 2);
        assert_eq!(&buf[13..19], &[0x65, b'V', b'a', b'l', b'u', b'e']);
        assert_eq!(buf[19], 1);
    }

    #[test]
    fn test_transaction_roundtrip() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let txn = make_transaction(&keypair, "alpha", 12345);

        let bytes = transaction_bytes(&txn);
        let decoded = decode_transaction(&bytes).unwrap();

        assert_eq!(txn.header, decoded.header);
        assert_eq!(txn.payload, decoded.payload);
        assert_eq!(txn.header_signature, decoded.header_signature);
        assert_eq!(txn.id(), decoded.id());
    }

    #[test]
    fn test_batch_list_roundtrip() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let txns = vec![
            make_transaction(&keypair, "alpha", 9000),
            make_transaction(&keypair, "beta", 9001),
            make_transaction(&keypair, "gamma", 9002),
        ];
        let ids: Vec<TransactionId> = txns.iter().map(|t| t.id()).collect();

        let batch = BatchBuilder::new(txns).sign(&keypair);
        let list = BatchList::new(vec![batch]);

        let bytes = batch_list_bytes(&list);
        let decoded = decode_batch_list(&bytes).unwrap();

        assert_eq!(decoded.batches.len(), 1);
        assert_eq!(decoded.batches[0].transactions.len(), 3);
        assert_eq!(decoded.batches[0].header.transaction_ids, ids);
        assert_eq!(
            decoded.batches[0].header_signature,
            list.batches[0].header_signature
        );
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let txn = make_transaction(&keypair, "alpha", 9000);
        let bytes = transaction_bytes(&txn);

        assert!(decode_transaction(&bytes[..bytes.len() / 2]).is_err());
        assert!(decode_batch_list(&[]).is_err());
    }

    #[test]
    fn test_decode_rejects_non_canonical_header() {
        let keypair = Keypair::from_seed(&[0x42; 32]);
        let txn = make_transaction(&keypair, "alpha", 9000);

        // Re-encode the header with its map keys in reverse order. Every
        // field still parses, but the bytes are not canonical.
        let Value::Map(entries) = transaction_header_to_value(&txn.header) else {
            unreachable!()
        };
        let mut scrambled = Vec::new();
        encode_uint(&mut scrambled, 5, entries.len() as u64);
        for (k, v) in entries.iter().rev() {
            encode_value_to(&mut scrambled, k);
            encode_value_to(&mut scrambled, v);
        }

        let envelope = Value::Map(vec![
            (Value::Integer(0.into()), Value::Bytes(scrambled)),
            (Value::Integer(1.into()), Value::Bytes(txn.payload.to_vec())),
            (
                Value::Integer(2.into()),
                Value::Bytes(txn.header_signature.0.to_vec()),
            ),
        ]);
        let bytes = encode_value(&envelope);

        assert!(matches!(
            decode_transaction(&bytes),
            Err(CoreError::MalformedTransaction(_))
        ));
    }
}
