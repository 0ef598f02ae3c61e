//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for all
//! copymark operations. It dispatches to the appropriate command function
//! and returns structured `Result<CmdResult>` values; it never prints and
//! never exits. Presentation belongs to the binary.

use crate::commands;
use crate::config::Config;
use crate::error::Result;

/// The main API facade for copymark operations.
///
/// Holds the configuration built at startup; every operation runs against
/// the same immutable view of it.
pub struct CopymarkApi {
    config: Config,
}

impl CopymarkApi {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Dry run: report the files that would be annotated.
    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.config)
    }

    /// Prepend the configured notice to every file lacking the marker.
    pub fn annotate(&self) -> Result<commands::CmdResult> {
        commands::annotate::run(&self.config)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
