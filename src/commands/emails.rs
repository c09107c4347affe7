//! `gradebook emails` command - list student emails in student-name order

use serde_json::json;

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;
use gradebook_core::error::Result;
use gradebook_core::Class;

/// Execute the emails command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let class = ctx.load_class()?;

    match ctx.format() {
        OutputFormat::Human => print!("{}", render_human(&class)),
        OutputFormat::Json => {
            let output = json!({ "class": class.name, "emails": class.emails_sorted_by_student_name() });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn render_human(class: &Class) -> String {
    class
        .emails_sorted_by_student_name()
        .into_iter()
        .map(|email| format!("{}\n", email))
        .collect()
}
