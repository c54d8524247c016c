//! CLI command implementations for starter.
//!
//! Each module corresponds to a subcommand (`starter <command>`).

pub mod init;
