//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use wayfinder_core::config::Config;
use wayfinder_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Config from `--config`, or the default location
    pub fn config(&self) -> Result<Config> {
        match &self.cli.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wayfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest travel-time routes between locations.");
        println!();
        println!("Run `wayfinder --help` for usage information.");
        Ok(())
    }
}
