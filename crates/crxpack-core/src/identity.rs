//! Stable extension identity derived from the public key.
//!
//! The identity is the SHA-256 of the SPKI DER bytes, truncated to the
//! first 32 hex characters, with each hex digit mapped independently to
//! the letters `a`..`p` (digit value plus ten, rendered as a base-26
//! digit). The transform carries no cryptographic meaning beyond
//! producing a stable, filesystem- and URL-safe token; it is implemented
//! as a pure per-nibble mapping so identical keys always produce
//! identical tokens.

use sha2::{Digest, Sha256};

use crate::error::{PackError, Result};

/// Number of characters in a derived identity.
pub const IDENTITY_LEN: usize = 32;

/// A 32-character lowercase identity token (alphabet `a`..`p`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Derive the identity from the public key's SPKI DER bytes.
///
/// Pure function of the input bytes: identical keys yield identical
/// tokens.
///
/// # Errors
///
/// Returns [`PackError::Input`] when no public key bytes are given.
pub fn derive_identity(public_key_der: &[u8]) -> Result<Identity> {
    if public_key_der.is_empty() {
        return Err(PackError::Input("public key is neither set, nor given".into()));
    }

    let digest = Sha256::digest(public_key_der);

    // First 32 hex characters = first 16 digest bytes, two nibbles each.
    let mut token = String::with_capacity(IDENTITY_LEN);
    for &byte in &digest[..IDENTITY_LEN / 2] {
        token.push((b'a' + (byte >> 4)) as char);
        token.push((b'a' + (byte & 0x0f)) as char);
    }

    Ok(Identity(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Independent rendition of the reference transform:
    /// `hex(sha256(key))[..32]` with each hex digit `v` replaced by the
    /// base-26 digit for `v + 10`.
    fn reference_identity(der: &[u8]) -> String {
        hex::encode(Sha256::digest(der))[..IDENTITY_LEN]
            .chars()
            .map(|c| char::from_digit(c.to_digit(16).unwrap() + 10, 26).unwrap())
            .collect()
    }

    #[test]
    fn matches_reference_transform() {
        for der in [b"some-public-key".as_slice(), &[0u8; 94], &[0xff; 94]] {
            assert_eq!(derive_identity(der).unwrap().as_str(), reference_identity(der));
        }
    }

    #[test]
    fn token_shape() {
        let id = derive_identity(b"key material").unwrap();
        assert_eq!(id.as_str().len(), IDENTITY_LEN);
        assert!(id.as_str().chars().all(|c| ('a'..='p').contains(&c)));
    }

    #[test]
    fn deterministic_and_collision_free_for_distinct_keys() {
        let a = derive_identity(b"key a").unwrap();
        let b = derive_identity(b"key a").unwrap();
        let c = derive_identity(b"key b").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn empty_key_is_an_input_error() {
        let err = derive_identity(&[]).unwrap_err();
        assert!(matches!(err, PackError::Input(_)));
    }
}
