//! crxpack CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crxpack_cli::cmd;
use crxpack_cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            dir,
            file_name,
            join_version,
            private_key,
            codebase,
            output_dir,
        } => cmd::pack::pack(
            &dir,
            &file_name,
            join_version.as_deref(),
            private_key.as_deref(),
            codebase.as_deref(),
            output_dir.as_deref(),
        ),
        Commands::Keygen { out } => cmd::keygen::keygen(&out),
        Commands::Id { key } => cmd::id::id(&key),
    }
}
