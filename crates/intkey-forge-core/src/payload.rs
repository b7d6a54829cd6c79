//! The intkey instruction payload.
//!
//! A payload is an immutable `{Verb, Name, Value}` instruction. Its
//! canonical CBOR bytes are hashed into the transaction header as a
//! commitment, so encoding must be byte-stable for the same logical
//! fields. Both the encoding and the hash are computed lazily and
//! cached per instance; recomputation always yields the same value.

use bytes::Bytes;
use ciborium::value::Value;
use std::cell::OnceCell;
use std::fmt;

use crate::canonical;
use crate::crypto::Sha512Hash;
use crate::error::CoreError;

/// Map keys of the payload's wire encoding. These are part of the
/// protocol shared with the receiving validator.
const VERB_KEY: &str = "Verb";
const NAME_KEY: &str = "Name";
const VALUE_KEY: &str = "Value";

/// The instruction verb.
///
/// The generator only ever emits `Set`, but the payload grammar shared
/// with the transaction processor also has `Inc` and `Dec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Set a key to a value.
    Set,
    /// Increment a key by a value.
    Inc,
    /// Decrement a key by a value.
    Dec,
}

impl Verb {
    /// The wire spelling of the verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Set => "set",
            Verb::Inc => "inc",
            Verb::Dec => "dec",
        }
    }

    /// Try to parse a wire spelling.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "set" => Some(Verb::Set),
            "inc" => Some(Verb::Inc),
            "dec" => Some(Verb::Dec),
            _ => None,
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable intkey payload with cached encoding and content hash.
#[derive(Clone)]
pub struct IntkeyPayload {
    verb: Verb,
    name: String,
    value: u32,

    encoded: OnceCell<Bytes>,
    content_hash: OnceCell<Sha512Hash>,
}

impl IntkeyPayload {
    /// Create a new payload. Fields are fixed for the lifetime of the
    /// instance.
    pub fn new(verb: Verb, name: impl Into<String>, value: u32) -> Self {
        Self {
            verb,
            name: name.into(),
            value,
            encoded: OnceCell::new(),
            content_hash: OnceCell::new(),
        }
    }

    /// The instruction verb.
    pub fn verb(&self) -> Verb {
        self.verb
    }

    /// The key name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The integer value.
    pub fn value(&self) -> u32 {
        self.value
    }

    fn to_value(&self) -> Value {
        Value::Map(vec![
            (
                Value::Text(VERB_KEY.into()),
                Value::Text(self.verb.as_str().into()),
            ),
            (Value::Text(NAME_KEY.into()), Value::Text(self.name.clone())),
            (
                Value::Text(VALUE_KEY.into()),
                Value::Integer(self.value.into()),
            ),
        ])
    }

    /// The canonical CBOR encoding, computed once per instance.
    pub fn to_bytes(&self) -> &Bytes {
        self.encoded
            .get_or_init(|| canonical::encode_value(&self.to_value()).into())
    }

    /// The SHA-512 hash of the canonical encoding, computed once per
    /// instance.
    pub fn sha512(&self) -> Sha512Hash {
        *self
            .content_hash
            .get_or_init(|| Sha512Hash::hash(self.to_bytes()))
    }

    /// Decode a payload from its wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let cursor = std::io::Cursor::new(bytes);
        let value: Value =
            ciborium::from_reader(cursor).map_err(|e| CoreError::DecodingError(e.to_string()))?;

        let map = match &value {
            Value::Map(m) => m,
            _ => return Err(CoreError::MalformedPayload("expected map".into())),
        };

        if map.len() != 3 {
            return Err(CoreError::MalformedPayload(format!(
                "expected 3 entries, got {}",
                map.len()
            )));
        }

        let get = |key: &str| -> Option<&Value> {
            map.iter()
                .find(|(k, _)| matches!(k, Value::Text(s) if s == key))
                .map(|(_, v)| v)
        };

        let verb = match get(VERB_KEY) {
            Some(Value::Text(s)) => Verb::from_str(s)
                .ok_or_else(|| CoreError::MalformedPayload(format!("unknown verb: {}", s)))?,
            _ => return Err(CoreError::MalformedPayload("missing verb".into())),
        };

        let name = match get(NAME_KEY) {
            Some(Value::Text(s)) => s.clone(),
            _ => return Err(CoreError::MalformedPayload("missing name".into())),
        };

        let value = match get(VALUE_KEY) {
            Some(Value::Integer(i)) => u32::try_from(i128::from(*i))
                .map_err(|_| CoreError::MalformedPayload("value out of range".into()))?,
            _ => return Err(CoreError::MalformedPayload("missing value".into())),
        };

        Ok(Self::new(verb, name, value))
    }
}

impl fmt::Debug for IntkeyPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntkeyPayload")
            .field("verb", &self.verb)
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

impl PartialEq for IntkeyPayload {
    fn eq(&self, other: &Self) -> bool {
        self.verb == other.verb && self.name == other.name && self.value == other.value
    }
}

impl Eq for IntkeyPayload {}
