//! `gradebook names` command - list student names
//!
//! Names are ordered by last name, then first name, and printed as
//! "First Last" or, with `--last-first`, "Last, First".

use serde_json::json;

use crate::cli::{NamesArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;
use gradebook_core::error::Result;
use gradebook_core::Class;

/// Execute the names command
pub fn execute(ctx: &CommandContext, args: &NamesArgs) -> Result<()> {
    let class = ctx.load_class()?;

    match ctx.format() {
        OutputFormat::Human => print!("{}", render_human(&class, args.last_first)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&to_json(&class))?),
    }

    Ok(())
}

fn render_human(class: &Class, last_first: bool) -> String {
    class
        .students_sorted_by_name()
        .into_iter()
        .map(|student| {
            let name = if last_first {
                student.last_first()
            } else {
                student.full_name()
            };
            name + "\n"
        })
        .collect()
}

fn to_json(class: &Class) -> serde_json::Value {
    let students: Vec<_> = class
        .students_sorted_by_name()
        .into_iter()
        .map(|student| {
            json!({
                "email": student.email,
                "first_name": student.first_name,
                "last_name": student.last_name,
            })
        })
        .collect();
    json!({ "class": class.name, "students": students })
}
