//! `crxpack id` - print the identity for an existing key.

use anyhow::{Context, Result};
use std::path::Path;

use crxpack_core::{PrivateKey, derive_identity};

pub fn id(key_path: &Path) -> Result<()> {
    let pem = std::fs::read_to_string(key_path)
        .with_context(|| format!("Failed to read {}", key_path.display()))?;

    let key = PrivateKey::from_pkcs1_pem(&pem)?;
    let identity = derive_identity(key.public_key()?.der())?;
    println!("{identity}");

    Ok(())
}
