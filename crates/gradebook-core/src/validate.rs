//! Consistency checks for a class
//!
//! `Class::validate` runs the structural checks: required fields, weight sum,
//! and the three category set equalities. `Class::validate_roster` checks the
//! term dates. Each runs every check and reports all failures together.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::class::term::is_valid_date;
use crate::class::Class;
use crate::error::Result;

/// Required total of `weights_by_assignment_category`
pub const WEIGHT_TOTAL: i64 = 100;

/// One failed check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("{}", unset_message(.0))]
    UnsetFields(Vec<String>),

    #[error("weights_by_assignment_category must add up to {} (found {total})", WEIGHT_TOTAL)]
    WeightsSum { total: i128 },

    #[error("{left_name} {left} and {right_name} {right} are not equal sets")]
    SetMismatch {
        left_name: &'static str,
        left: String,
        right_name: &'static str,
        right: String,
    },

    #[error("term {id:?} has an invalid {bound} date {date:?}")]
    InvalidTermDate {
        id: String,
        bound: &'static str,
        date: String,
    },

    #[error("term {id:?} starts on {start} but ends on {end}")]
    TermOutOfOrder {
        id: String,
        start: String,
        end: String,
    },
}

fn unset_message(fields: &[String]) -> String {
    match fields {
        [field] => format!("a field in class is unset: {}", field),
        _ => format!("fields in class are unset: {}", fields.join(", ")),
    }
}

/// Every failed check from a validation run, in check order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    fn from_issues(issues: Vec<ValidationIssue>) -> std::result::Result<(), Self> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self(issues))
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }

    /// Messages for each failed check
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

/// Render a set as `{a, b, c}`
fn render(set: &BTreeSet<&str>) -> String {
    format!("{{{}}}", set.iter().copied().collect::<Vec<_>>().join(", "))
}

fn check_eq(
    left_name: &'static str,
    left: &BTreeSet<&str>,
    right_name: &'static str,
    right: &BTreeSet<&str>,
) -> Option<ValidationIssue> {
    (left != right).then(|| ValidationIssue::SetMismatch {
        left_name,
        left: render(left),
        right_name,
        right: render(right),
    })
}

impl Class {
    fn check_initialization(&self) -> Option<ValidationIssue> {
        let unset = self.unset_fields();
        (!unset.is_empty())
            .then(|| ValidationIssue::UnsetFields(unset.iter().map(|f| f.to_string()).collect()))
    }

    fn check_weights_sum(&self) -> Option<ValidationIssue> {
        // i128 holds any realistic number of i64 weights without overflow
        let total: i128 = self
            .weights_by_assignment_category
            .values()
            .map(|&weight| i128::from(weight))
            .sum();
        (total != i128::from(WEIGHT_TOTAL)).then_some(ValidationIssue::WeightsSum { total })
    }

    /// Check the class's structure.
    ///
    /// Fails if a required field is unset, if the weights do not add up to
    /// 100, or if the assignment categories differ from the categories named
    /// by the assignment types, the labels, or the weights.
    pub fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let categories: BTreeSet<&str> = self
            .assignment_categories
            .iter()
            .map(String::as_str)
            .collect();
        let type_categories: BTreeSet<&str> = self
            .categories_by_assignment_type
            .values()
            .map(String::as_str)
            .collect();
        let labels: BTreeSet<&str> = self
            .labels_by_assignment_category
            .keys()
            .map(String::as_str)
            .collect();
        let weights: BTreeSet<&str> = self
            .weights_by_assignment_category
            .keys()
            .map(String::as_str)
            .collect();

        let issues = [
            self.check_initialization(),
            self.check_weights_sum(),
            check_eq(
                "assignment_categories",
                &categories,
                "categories_by_assignment_type",
                &type_categories,
            ),
            check_eq(
                "assignment_categories",
                &categories,
                "labels_by_assignment_category",
                &labels,
            ),
            check_eq(
                "assignment_categories",
                &categories,
                "weights_by_assignment_category",
                &weights,
            ),
        ];

        ValidationErrors::from_issues(issues.into_iter().flatten().collect())
    }

    /// Check the terms: both dates are real YYYYMMDD dates and the start is
    /// no later than the end.
    pub fn validate_roster(&self) -> std::result::Result<(), ValidationErrors> {
        let mut issues = Vec::new();

        for (id, term) in &self.terms_by_id {
            let mut dates_ok = true;
            for (bound, date) in [("start", &term.start), ("end", &term.end)] {
                if !is_valid_date(date) {
                    dates_ok = false;
                    issues.push(ValidationIssue::InvalidTermDate {
                        id: id.clone(),
                        bound,
                        date: date.clone(),
                    });
                }
            }
            if dates_ok && term.start > term.end {
                issues.push(ValidationIssue::TermOutOfOrder {
                    id: id.clone(),
                    start: term.start.clone(),
                    end: term.end.clone(),
                });
            }
        }

        ValidationErrors::from_issues(issues)
    }

    /// Log students whose email has no `@` or whose name is empty. These are
    /// allowed, since some schools key students by an ID instead of an email.
    pub fn warn_roster(&self) {
        for (email, student) in &self.students_by_email {
            if !email.contains('@') {
                tracing::warn!(email = %email, "student_email_without_at");
            }
            if student.first_name.is_empty() || student.last_name.is_empty() {
                tracing::warn!(email = %email, "student_name_incomplete");
            }
        }
    }

    /// Run both `validate` and `validate_roster`, joining their failures
    pub fn check(&self) -> Result<()> {
        let mut issues = Vec::new();
        if let Err(ValidationErrors(found)) = self.validate() {
            issues.extend(found);
        }
        if let Err(ValidationErrors(found)) = self.validate_roster() {
            issues.extend(found);
        }
        ValidationErrors::from_issues(issues)?;
        Ok(())
    }
}
