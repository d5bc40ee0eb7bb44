//! crxpack - package web extensions into signed CRX files.
//!
//! The binary owns every filesystem side effect: reading key files,
//! walking the project directory, and persisting the `.crx`, the
//! generated `.pem`, and the update descriptor. All packaging logic lives
//! in `crxpack-core`.

pub mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "crxpack")]
#[command(author, version, about = "Package web extensions into signed CRX files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Package a project directory into a signed .crx
    Pack {
        /// Project directory containing manifest.json
        dir: PathBuf,
        /// Output base name (a trailing .crx is stripped)
        #[arg(long, default_value = "extension")]
        file_name: String,
        /// Separator between file name and manifest version (e.g. "-")
        #[arg(long)]
        join_version: Option<String>,
        /// Existing PKCS#1 PEM private key; generated and persisted when absent
        #[arg(long)]
        private_key: Option<PathBuf>,
        /// Download-location prefix for the update descriptor
        #[arg(long)]
        codebase: Option<String>,
        /// Where to write outputs (defaults to the project directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// Generate a new RSA private key
    Keygen {
        /// Output PEM path
        out: PathBuf,
    },
    /// Print the identity token for a private key
    Id {
        /// PKCS#1 PEM private key
        key: PathBuf,
    },
}
