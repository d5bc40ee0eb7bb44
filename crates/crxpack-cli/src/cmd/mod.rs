//! Subcommand implementations.

pub mod id;
pub mod keygen;
pub mod pack;
