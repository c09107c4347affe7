//! `gradebook validate` command
//!
//! Loading the class already runs every check, so reaching the output means
//! the class is valid.

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use gradebook_core::error::Result;

/// Execute the validate command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let class = ctx.load_class()?;
    tracing::debug!(path = %ctx.class_file.display(), "class_valid");

    match ctx.format() {
        OutputFormat::Human => println!("{}: ok", class.name),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "class": class.name, "valid": true }))?
        ),
    }

    Ok(())
}
