//! Subcommand implementations.

pub mod demo;
pub mod digest;
pub mod scalar;
