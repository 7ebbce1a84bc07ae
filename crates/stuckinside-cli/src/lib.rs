//! # stuckinside-cli — Subcommand Handlers
//!
//! Library side of the `stuckinside` binary: argument types and `run_*`
//! handlers for each subcommand. The binary in `main.rs` only parses
//! arguments, initializes tracing, and dispatches here.

pub mod serve;
pub mod summary;
