//! `crxpack keygen` - generate an RSA private key.

use anyhow::Result;
use std::path::Path;

use crxpack_core::{PrivateKey, derive_identity};

pub fn keygen(out: &Path) -> Result<()> {
    // Don't overwrite existing keys
    if out.exists() {
        anyhow::bail!(
            "key file already exists at {}. Remove it first or pick another path.",
            out.display()
        );
    }

    let key = PrivateKey::generate()?;
    std::fs::write(out, key.to_pkcs1_pem()?)?;

    let identity = derive_identity(key.public_key()?.der())?;
    println!("Generated RSA private key: {}", out.display());
    println!("Extension identity: {identity}");

    Ok(())
}
