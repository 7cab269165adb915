//! Command handlers for the climate-subset CLI.
//!
//! Each subcommand has its own module with a public handler function
//! that `main()` dispatches to.

pub mod convert;
pub mod init;
pub mod tools;
