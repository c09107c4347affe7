//! `gradebook new` command - create a blank gradebook file

use std::path::{Path, PathBuf};

use serde_json::json;

use crate::cli::{NewArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use gradebook_core::class::term;
use gradebook_core::error::Result;
use gradebook_core::gradebook::{validate_date, validate_name, validate_type};
use gradebook_core::{Class, Gradebook};

/// Execute the new command
pub fn execute(ctx: &CommandContext, args: &NewArgs) -> Result<()> {
    let class = ctx.load_class()?;
    let path = create(&class, &ctx.dir, args)?;

    match ctx.format() {
        OutputFormat::Human => println!("{}", path.display()),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "path": path.display().to_string() }))?
        ),
    }

    Ok(())
}

/// Check the arguments and write the gradebook into `dir`
fn create(class: &Class, dir: &Path, args: &NewArgs) -> Result<PathBuf> {
    let date = args.date.clone().unwrap_or_else(term::today);

    validate_name(&args.name)?;
    validate_type(class, &args.r#type)?;
    validate_date(&date)?;

    let gradebook = Gradebook::blank(class, &args.r#type, &args.name, &date)?;
    gradebook.write_new(dir)
}
