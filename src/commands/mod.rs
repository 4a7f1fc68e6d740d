//! Command handlers for the techicon CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod completions;
pub mod init;
pub mod list;
pub mod lookup;
pub mod resolve;
