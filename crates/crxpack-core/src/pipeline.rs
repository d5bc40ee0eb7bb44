//! The packaging run: a strict linear pipeline.
//!
//! `gather` validates the project inputs (file list plus exactly one
//! manifest); `run` executes the stage chain
//! key → public key → archive → signature → container → optional
//! identity/descriptor. Any stage error aborts the whole run - the
//! returned [`PackOutput`] is the only thing a caller may persist, and it
//! only exists when every stage succeeded.

use crate::archive::build_archive;
use crate::container::assemble;
use crate::error::{PackError, Result};
use crate::identity::{Identity, derive_identity};
use crate::keys::obtain_private_key;
use crate::manifest::Manifest;
use crate::project::{ProjectContext, ProjectFile};
use crate::sign::{SignatureDigest, sign};
use crate::update::{build_descriptor, join_url, url_basename, url_dirname};

/// Recognized packaging options.
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Output base name; a trailing `.crx` suffix is stripped.
    pub file_name: String,
    /// Separator appended between the file name and the manifest version
    /// (e.g. `"-"` produces `ext-1.0.crx`).
    pub join_version: Option<String>,
    /// Existing PKCS#1 PEM private key. When absent, a key is generated
    /// and returned in [`PackOutput::generated_key_pem`] for persistence.
    pub private_key_pem: Option<String>,
    /// Override for the download-location prefix in the update
    /// descriptor. Defaults to the directory portion of the manifest's
    /// `update_url`.
    pub codebase: Option<String>,
    /// Signature digest; defaults to SHA-1 for wire compatibility.
    pub digest: SignatureDigest,
}

impl Default for PackOptions {
    fn default() -> Self {
        Self {
            file_name: crate::DEFAULT_FILE_NAME.to_string(),
            join_version: None,
            private_key_pem: None,
            codebase: None,
            digest: SignatureDigest::default(),
        }
    }
}

/// Everything a successful run produced. The caller persists these; the
/// pipeline itself writes nothing.
#[derive(Debug)]
pub struct PackOutput {
    /// File name for the package (`<name>.crx`).
    pub package_file: String,
    /// The assembled CRX container.
    pub package: Vec<u8>,
    /// PEM of a freshly generated private key, to be persisted as
    /// [`crate::DEFAULT_KEY_FILE`]. `None` when an existing key was used.
    pub generated_key_pem: Option<String>,
    /// Update descriptor as `(file name, XML document)`, present only
    /// when the manifest declares `update_url`.
    pub update_descriptor: Option<(String, String)>,
    /// Identity derived for the descriptor, when one was built.
    pub identity: Option<Identity>,
}

/// Collect and validate the inputs for a packaging run.
///
/// # Errors
///
/// Returns [`PackError::Config`] when the project has no files, when no
/// `manifest.json` is found, when more than one is found, or when the
/// manifest does not parse.
pub fn gather(ctx: &dyn ProjectContext) -> Result<(Vec<ProjectFile>, Manifest)> {
    let files = ctx.find_files()?;
    if files.is_empty() {
        return Err(PackError::Config("no project files".into()));
    }

    let mut manifests = files.iter().filter(|f| {
        url_basename(&f.path).eq_ignore_ascii_case("manifest.json")
    });

    let manifest_file = manifests.next().ok_or_else(|| {
        PackError::Config(
            "cannot find manifest.json - is this a web-extension project?".into(),
        )
    })?;
    if manifests.next().is_some() {
        return Err(PackError::Config(
            "more than one manifest.json in the project".into(),
        ));
    }

    let manifest = Manifest::parse(&manifest_file.content)?;
    tracing::debug!(files = files.len(), version = %manifest.version, "project gathered");

    Ok((files, manifest))
}

/// Execute the packaging pipeline over validated inputs.
///
/// # Errors
///
/// Propagates the first stage failure ([`PackError::KeyParse`],
/// [`PackError::Archive`], [`PackError::Signing`], [`PackError::Input`],
/// or [`PackError::Validation`]); no partial output is returned.
pub fn run(files: &[ProjectFile], manifest: &Manifest, options: &PackOptions) -> Result<PackOutput> {
    let mut file_name = strip_crx_suffix(&options.file_name).to_string();
    if let Some(sep) = &options.join_version {
        file_name = format!("{file_name}{sep}{}", manifest.version);
    }

    let (key, generated) = obtain_private_key(options.private_key_pem.as_deref())?;
    let public = key.public_key()?;

    let archive = build_archive(
        files.iter().map(|f| (f.path.as_str(), f.content.as_slice())),
    )?;
    let signature = sign(&archive, &key, options.digest)?;
    let package = assemble(&signature, public.der(), &archive);
    let package_file = format!("{file_name}.crx");
    tracing::info!(file = %package_file, bytes = package.len(), "package assembled");

    let mut identity = None;
    let mut update_descriptor = None;
    if let Some(update_url) = &manifest.update_url {
        let id = derive_identity(public.der())?;

        let descriptor_file = url_basename(update_url).to_string();
        if descriptor_file.is_empty() {
            return Err(PackError::Validation(format!(
                "update_url has no file name: {update_url}"
            )));
        }

        let prefix = options
            .codebase
            .as_deref()
            .unwrap_or_else(|| url_dirname(update_url));
        let codebase = join_url(prefix, &package_file);

        let xml = build_descriptor(&id, &codebase, &manifest.version)?;
        tracing::debug!(file = %descriptor_file, codebase = %codebase, "update descriptor built");

        identity = Some(id);
        update_descriptor = Some((descriptor_file, xml));
    }

    Ok(PackOutput {
        package_file,
        package,
        generated_key_pem: if generated { Some(key.to_pkcs1_pem()?) } else { None },
        update_descriptor,
        identity,
    })
}

/// Strip a trailing `.crx` (any case), once.
///
/// Compares raw bytes so multibyte file names never hit a char-boundary
/// slice; when the last four bytes are ASCII `.crx`, the cut point is a
/// valid boundary.
fn strip_crx_suffix(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() >= 4 && bytes[bytes.len() - 4..].eq_ignore_ascii_case(b".crx") {
        &name[..name.len() - 4]
    } else {
        name
    }
}
