//! `gradebook calc` command - overall and per-category averages
//!
//! For each student, in name order: the weighted overall average, then the
//! average for each category in label order. The whole report is computed
//! before anything is printed, so a failure leaves no partial output.

use serde::Serialize;

use crate::cli::{OutputFormat, TermArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::resolve_term;
use gradebook_core::error::Result;
use gradebook_core::{AverageResult, Class};

/// Execute the calc command
pub fn execute(ctx: &CommandContext, args: &TermArgs) -> Result<()> {
    let mut class = ctx.load_class()?;
    let term = resolve_term(&class, args.term.as_deref())?;

    class.load_grades(&ctx.dir, term.as_ref())?;
    tracing::debug!(elapsed = ?ctx.start.elapsed(), "load_grades");

    let report = CalcReport::build(&class, args.term.as_deref())?;

    match ctx.format() {
        OutputFormat::Human => print!("{}", report.render_human()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

#[derive(Debug, Serialize)]
struct CategoryAverage<'a> {
    category: &'a str,
    label: &'a str,
    average: AverageResult,
}

#[derive(Debug, Serialize)]
struct StudentAverages<'a> {
    email: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    overall: AverageResult,
    categories: Vec<CategoryAverage<'a>>,
}

/// Averages for every student in a class with grades loaded
#[derive(Debug, Serialize)]
pub struct CalcReport<'a> {
    class: &'a str,
    term: Option<&'a str>,
    students: Vec<StudentAverages<'a>>,
}

impl<'a> CalcReport<'a> {
    pub fn build(class: &'a Class, term: Option<&'a str>) -> Result<Self> {
        let categories = class.categories_sorted_by_label();
        let mut students = Vec::with_capacity(class.students_by_email.len());

        for student in class.students_sorted_by_name() {
            let overall = student.total_average(&class.weights_by_assignment_category)?;
            let mut averages = Vec::with_capacity(categories.len());
            for &category in &categories {
                averages.push(CategoryAverage {
                    category,
                    label: class.label(category),
                    average: student.average(category)?,
                });
            }
            students.push(StudentAverages {
                email: &student.email,
                first_name: &student.first_name,
                last_name: &student.last_name,
                overall,
                categories: averages,
            });
        }

        Ok(Self {
            class: &class.name,
            term,
            students,
        })
    }

    pub fn render_human(&self) -> String {
        let mut out = String::new();
        for student in &self.students {
            out.push_str(&format!("{} {}\n", student.first_name, student.last_name));
            out.push_str(&format!("\tOverall average: {}\n", student.overall));
            for category in &student.categories {
                out.push_str(&format!("\t{}: {}\n", category.label, category.average));
            }
        }
        out
    }
}
