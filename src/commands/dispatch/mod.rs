//! Command dispatch logic for gradebook

use std::time::Instant;

use crate::cli::Cli;
use gradebook_core::error::Result;
use tracing::debug;

mod command;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);

    debug!(
        elapsed = ?start.elapsed(),
        dir = %ctx.dir.display(),
        class = %ctx.class_file.display(),
        "resolve_paths"
    );

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
