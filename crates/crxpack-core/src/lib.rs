//! crxpack-core - signed CRX2 package assembly.
//!
//! Packages a set of web-extension files into the CRX2 binary container:
//! a deterministic zip archive of the sources, signed with an RSA key,
//! prefixed by a fixed 16-byte header carrying the public key and
//! signature lengths.
//!
//! # Architecture
//!
//! - **Newtypes**: [`PrivateKey`], [`PublicKey`], and [`Identity`] keep key
//!   material and derived tokens distinct from raw byte buffers.
//! - **Capability injection**: file discovery goes through the
//!   [`ProjectContext`] trait so the packaging pipeline never touches the
//!   filesystem directly.
//! - **Linear pipeline**: [`pipeline::run`] executes the fixed stage chain
//!   (key → archive → signature → container → descriptor); any stage error
//!   aborts the run before anything is persisted.

pub mod archive;
pub mod container;
pub mod error;
pub mod identity;
pub mod keys;
pub mod manifest;
pub mod pipeline;
pub mod project;
pub mod sign;
pub mod update;

pub use container::{CRX_FORMAT_VERSION, CRX_HEADER_LEN, CRX_MAGIC};
pub use error::{PackError, Result};
pub use identity::{Identity, derive_identity};
pub use keys::{PrivateKey, PublicKey, obtain_private_key};
pub use manifest::Manifest;
pub use pipeline::{PackOptions, PackOutput};
pub use project::{DirContext, ProjectContext, ProjectFile};
pub use sign::SignatureDigest;

/// Default basename for a freshly generated private key.
pub const DEFAULT_KEY_FILE: &str = "extension.pem";

/// Default package name when none is configured.
pub const DEFAULT_FILE_NAME: &str = "extension";
