//! Namespace-scoped state addresses.
//!
//! An address declares which state entry a transaction reads or writes.
//! It is derived, never chosen: a 6-hex-character namespace prefix
//! followed by the full SHA-512 hex digest of the key name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::crypto::Sha512Hash;
use crate::transaction::FAMILY_NAME;

/// Length of the namespace prefix in hex characters.
pub const PREFIX_LEN: usize = 6;

/// Total address length: prefix + full SHA-512 digest in hex.
pub const ADDRESS_LEN: usize = PREFIX_LEN + 128;

/// The namespace prefix for the intkey family: the first 6 hex
/// characters of SHA-512 of the family name.
pub fn namespace_prefix() -> String {
    let mut prefix = Sha512Hash::hash(FAMILY_NAME.as_bytes()).to_hex();
    prefix.truncate(PREFIX_LEN);
    prefix
}

/// A derived state address, held as lowercase hex text.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Derive the address for a key name in the intkey namespace.
    ///
    /// Same name always yields the same address.
    pub fn derive(name: &str) -> Self {
        let mut addr = namespace_prefix();
        addr.push_str(&Sha512Hash::hash(name.as_bytes()).to_hex());
        Self(addr)
    }

    /// Wrap an already-derived address string.
    ///
    /// Rejects anything that is not `ADDRESS_LEN` lowercase hex chars.
    pub fn parse(s: &str) -> Result<Self, crate::error::CoreError> {
        if s.len() != ADDRESS_LEN
            || !s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(crate::error::CoreError::MalformedAddress(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }

    /// The address as a hex string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace prefix portion.
    pub fn prefix(&self) -> &str {
        &self.0[..PREFIX_LEN]
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}..{})", &self.0[..PREFIX_LEN + 8], &self.0[ADDRESS_LEN - 4..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespace_prefix() {
        let prefix = namespace_prefix();
        assert_eq!(prefix.len(), PREFIX_LEN);
        // First 6 hex chars of sha512("intkey").
        assert_eq!(prefix, "1cf126");
    }

    #[test]
    fn test_address_is_pure() {
        let a1 = Address::derive("foo");
        let a2 = Address::derive("foo");
        assert_eq!(a1, a2);

        let a3 = Address::derive("bar");
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_address_length() {
        let addr = Address::derive("anything");
        assert_eq!(addr.as_str().len(), ADDRESS_LEN);
        assert!(addr.as_str().starts_with(&namespace_prefix()));
    }

    #[test]
    fn test_address_parse_roundtrip() {
        let addr = Address::derive("roundtrip");
        let parsed = Address::parse(addr.as_str()).unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn test_address_parse_rejects_garbage() {
        assert!(Address::parse("too short").is_err());
        assert!(Address::parse(&"g".repeat(ADDRESS_LEN)).is_err());
        assert!(Address::parse(&"A".repeat(ADDRESS_LEN)).is_err());
    }
}
