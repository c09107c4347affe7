//! Command trait and context for dispatching commands

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::paths::{resolve_class_file, resolve_dir};
use crate::cli::{Cli, Commands, OutputFormat};
use crate::commands;
use gradebook_core::error::Result;
use gradebook_core::Class;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    /// Absolute gradebook directory
    pub dir: PathBuf,
    /// Class file, resolved against `dir`
    pub class_file: PathBuf,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        let dir = resolve_dir(&cli.dir);
        let class_file = resolve_class_file(&dir, &cli.class);
        Self {
            cli,
            dir,
            class_file,
            start,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.cli.format
    }

    /// Load the class file and reject it unless it is valid
    pub fn load_class(&self) -> Result<Class> {
        let class = Class::load_checked(&self.class_file)?;
        tracing::debug!(elapsed = ?self.start.elapsed(), "load_class");
        Ok(class)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Names(args) => commands::names::execute(ctx, args),
            Commands::Emails => commands::emails::execute(ctx),
            Commands::New(args) => commands::new::execute(ctx, args),
            Commands::Calc(args) => commands::calc::execute(ctx, args),
            Commands::Unscored(args) => commands::unscored::execute(ctx, args),
            Commands::Validate => commands::validate::execute(ctx),
        }
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("gradebook {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Command-line tools for a classroom gradebook.");
        println!();
        println!("Run `gradebook --help` for usage information.");
        Ok(())
    }
}
