//! `gradebook unscored` command - count gradebook entries without a score

use serde::Serialize;

use crate::cli::{OutputFormat, TermArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{pluralize_assignments, resolve_term};
use gradebook_core::error::Result;
use gradebook_core::Class;

/// Execute the unscored command
pub fn execute(ctx: &CommandContext, args: &TermArgs) -> Result<()> {
    let mut class = ctx.load_class()?;
    let term = resolve_term(&class, args.term.as_deref())?;

    class.load_unscored(&ctx.dir, term.as_ref())?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "load_unscored");

    let report = UnscoredReport::build(&class, args.term.as_deref());

    match ctx.format() {
        OutputFormat::Human => print!("{}", report.render_human()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct CategoryCount<'a> {
    category: &'a str,
    label: &'a str,
    unscored: usize,
}

#[derive(Debug, Serialize)]
struct StudentCounts<'a> {
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    categories: Vec<CategoryCount<'a>>,
}

/// Unscored counts for every student in a class
#[derive(Debug, Serialize)]
pub struct UnscoredReport<'a> {
    class: &'a str,
    term: Option<&'a str>,
    students: Vec<StudentCounts<'a>>,
}

impl<'a> UnscoredReport<'a> {
    pub fn build(class: &'a Class, term: Option<&'a str>) -> Self {
        let categories = class.categories_sorted_by_label();
        let students = class
            .students_sorted_by_name()
            .into_iter()
            .map(|student| StudentCounts {
                email: &student.email,
                first_name: &student.first_name,
                last_name: &student.last_name,
                categories: categories
                    .iter()
                    .map(|&category| CategoryCount {
                        category,
                        label: class.label(category),
                        unscored: student.unscored(category),
                    })
                    .collect(),
            })
            .collect();

        Self {
            class: &class.name,
            term,
            students,
        }
    }

    pub fn render_human(&self) -> String {
        let mut out = String::new();
        for student in &self.students {
            out.push_str(&format!("{} {}:\n", student.first_name, student.last_name));
            for category in &student.categories {
                out.push_str(&format!(
                    "\t{}: {} unscored {}\n",
                    category.label,
                    category.unscored,
                    pluralize_assignments(category.unscored)
                ));
            }
        }
        out
    }
}
