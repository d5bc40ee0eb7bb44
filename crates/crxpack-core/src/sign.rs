//! Archive signing.
//!
//! PKCS#1 v1.5 over a fixed digest, which keeps signatures deterministic
//! for a given (archive, key) pair. SHA-1 is the historical CRX2 digest
//! and remains the default for wire compatibility; it is cryptographically
//! weak, so [`SignatureDigest::Sha256`] is available for callers whose
//! verifiers accept it. The digest is never switched implicitly.

use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha1::Sha1;
use sha2::Sha256;

use crate::error::{PackError, Result};
use crate::keys::PrivateKey;

/// Digest algorithm used for the package signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureDigest {
    /// Historical CRX2 behavior. Weak, but what existing verifiers expect.
    #[default]
    Sha1,
    /// Stronger digest; produces signatures incompatible with legacy
    /// CRX2 verifiers.
    Sha256,
}

impl SignatureDigest {
    /// Name as it would appear in a verifier configuration.
    pub fn name(self) -> &'static str {
        match self {
            SignatureDigest::Sha1 => "sha1",
            SignatureDigest::Sha256 => "sha256",
        }
    }
}

/// Sign the exact archive bytes with the private key.
///
/// # Errors
///
/// Returns [`PackError::Signing`] if the key material is unusable for
/// signing.
pub fn sign(archive: &[u8], key: &PrivateKey, digest: SignatureDigest) -> Result<Vec<u8>> {
    let signature = match digest {
        SignatureDigest::Sha1 => SigningKey::<Sha1>::new(key.inner().clone())
            .try_sign(archive)
            .map_err(|e| PackError::Signing(e.to_string()))?
            .to_vec(),
        SignatureDigest::Sha256 => SigningKey::<Sha256>::new(key.inner().clone())
            .try_sign(archive)
            .map_err(|e| PackError::Signing(e.to_string()))?
            .to_vec(),
    };
    tracing::debug!(digest = digest.name(), len = signature.len(), "archive signed");
    Ok(signature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1v15::{Signature, VerifyingKey};
    use rsa::signature::Verifier;

    #[test]
    fn signing_is_deterministic() {
        let key = PrivateKey::generate().unwrap();
        let archive = b"archive bytes";
        let a = sign(archive, &key, SignatureDigest::Sha1).unwrap();
        let b = sign(archive, &key, SignatureDigest::Sha1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sha1_signature_verifies() {
        let key = PrivateKey::generate().unwrap();
        let archive = b"archive bytes";
        let sig = sign(archive, &key, SignatureDigest::Sha1).unwrap();

        let verifying = VerifyingKey::<Sha1>::new(key.inner().to_public_key());
        let sig = Signature::try_from(sig.as_slice()).unwrap();
        verifying.verify(archive, &sig).unwrap();
    }

    #[test]
    fn digests_produce_distinct_signatures() {
        let key = PrivateKey::generate().unwrap();
        let archive = b"archive bytes";
        let sha1 = sign(archive, &key, SignatureDigest::Sha1).unwrap();
        let sha256 = sign(archive, &key, SignatureDigest::Sha256).unwrap();
        assert_ne!(sha1, sha256);
    }
}
