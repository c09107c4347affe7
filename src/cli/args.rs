//! Per-command argument structures

use clap::Args;

/// Arguments for the names command.
#[derive(Args, Debug, Clone)]
pub struct NamesArgs {
    /// Print names as "Last, First" instead of "First Last"
    #[arg(long)]
    pub last_first: bool,
}

/// Arguments for the new command.
#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Name of the gradebook (only [A-Za-z0-9._-] are valid)
    #[arg(long)]
    pub name: String,

    /// Assignment type (must be in the class file)
    #[arg(long = "type")]
    pub r#type: String,

    /// YYYYMMDD date for the gradebook (default is today)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for commands that can be limited to one term.
#[derive(Args, Debug, Clone)]
pub struct TermArgs {
    /// Limit to gradebooks dated within this term
    #[arg(long)]
    pub term: Option<String>,
}
