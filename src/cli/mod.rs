//! CLI argument parsing for gradebook
//!
//! Uses clap for argument parsing.
//! Supports global flags: --class, --dir, --format, --verbose

pub mod args;
pub mod argv;
pub mod output;
pub mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{NamesArgs, NewArgs, TermArgs};
pub use output::OutputFormat;

/// Default class file, relative to --dir
pub const DEFAULT_CLASS_FILE: &str = "class.json";

/// Gradebook - command-line tools for a classroom gradebook
#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Class file to use; a relative path is resolved inside --dir
    #[arg(long, global = true, env = "GRADEBOOK_CLASS", default_value = DEFAULT_CLASS_FILE)]
    pub class: PathBuf,

    /// Directory holding the gradebook and class files
    #[arg(long, global = true, env = "GRADEBOOK_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Log debug events to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Name used to prefix error messages, e.g. `gradebook calc`
    pub fn command_name(&self) -> String {
        match &self.command {
            Some(command) => format!("gradebook {}", command.name()),
            None => "gradebook".to_string(),
        }
    }
}

/// Top-level gradebook commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the names of students in a class
    Names(NamesArgs),

    /// Print the emails of students in a class
    Emails,

    /// Create a new gradebook file for a class
    New(NewArgs),

    /// Calculate and print the grades for a class
    #[command(alias = "average")]
    Calc(TermArgs),

    /// Count and print unscored assignments for a class
    #[command(alias = "missing")]
    Unscored(TermArgs),

    /// Check a class file for problems
    Validate,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Names(_) => "names",
            Commands::Emails => "emails",
            Commands::New(_) => "new",
            Commands::Calc(_) => "calc",
            Commands::Unscored(_) => "unscored",
            Commands::Validate => "validate",
        }
    }
}
