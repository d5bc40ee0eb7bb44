//! CRX2 binary container layout.
//!
//! ```text
//! offset  size  field
//! 0       4     magic "Cr24"
//! 4       4     format version, u32 LE = 2
//! 8       4     public key length, u32 LE
//! 12      4     signature length, u32 LE
//! 16      -     public key (SPKI DER), signature, zip archive
//! ```
//!
//! No padding or alignment: total length is always
//! `16 + |key| + |signature| + |archive|`.

/// Magic bytes identifying a CRX container.
pub const CRX_MAGIC: [u8; 4] = *b"Cr24";

/// Container format version.
pub const CRX_FORMAT_VERSION: u32 = 2;

/// Fixed header size in bytes.
pub const CRX_HEADER_LEN: usize = 16;

/// Concatenate header, public key, signature, and archive into the final
/// package. Pure function; the inputs are embedded byte-for-byte.
pub fn assemble(signature: &[u8], public_key: &[u8], archive: &[u8]) -> Vec<u8> {
    let mut package =
        Vec::with_capacity(CRX_HEADER_LEN + public_key.len() + signature.len() + archive.len());

    package.extend_from_slice(&CRX_MAGIC);
    package.extend_from_slice(&CRX_FORMAT_VERSION.to_le_bytes());
    package.extend_from_slice(&(public_key.len() as u32).to_le_bytes());
    package.extend_from_slice(&(signature.len() as u32).to_le_bytes());
    package.extend_from_slice(public_key);
    package.extend_from_slice(signature);
    package.extend_from_slice(archive);

    package
}
