//! `crxpack pack` - package a project directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crxpack_core::{DEFAULT_KEY_FILE, DirContext, PackOptions, pipeline};

/// Package `dir` into a signed `.crx`, writing all artifacts only after
/// the whole pipeline has succeeded.
pub fn pack(
    dir: &Path,
    file_name: &str,
    join_version: Option<&str>,
    private_key: Option<&Path>,
    codebase: Option<&str>,
    output_dir: Option<&Path>,
) -> Result<()> {
    let private_key_pem = private_key
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read private key {}", path.display()))
        })
        .transpose()?;

    let ctx = DirContext::new(dir);
    let (files, manifest) = pipeline::gather(&ctx)?;

    let options = PackOptions {
        file_name: file_name.to_string(),
        join_version: join_version.map(String::from),
        private_key_pem,
        codebase: codebase.map(String::from),
        ..Default::default()
    };

    let out = pipeline::run(&files, &manifest, &options)?;

    // Pipeline succeeded; persist everything it produced.
    let out_dir = output_dir.unwrap_or(dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let package_path = out_dir.join(&out.package_file);
    fs::write(&package_path, &out.package)
        .with_context(|| format!("Failed to write {}", package_path.display()))?;
    println!("Created {}", package_path.display());

    if let Some(pem) = &out.generated_key_pem {
        let key_path = out_dir.join(DEFAULT_KEY_FILE);
        fs::write(&key_path, pem)
            .with_context(|| format!("Failed to write {}", key_path.display()))?;
        println!("Created {} (keep it safe - it identifies your extension)", key_path.display());
    }

    if let Some((name, xml)) = &out.update_descriptor {
        let descriptor_path = out_dir.join(name);
        fs::write(&descriptor_path, xml)
            .with_context(|| format!("Failed to write {}", descriptor_path.display()))?;
        println!("Created {}", descriptor_path.display());
    }

    Ok(())
}
