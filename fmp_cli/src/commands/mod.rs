//! CLI subcommand implementations.

pub mod company;
pub mod crypto;
pub mod market;
pub mod news;
pub mod statements;
