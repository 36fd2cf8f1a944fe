//! CLI argument model for the `prlink-action` binary.
//!
//! Every flag falls back to the environment variable GitHub Actions already
//! provides, so the binary runs unchanged as an action entrypoint.

pub mod cli_args;
pub mod validation;

pub use cli_args::Cli;
