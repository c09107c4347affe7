use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Deserialize;

/// A student in a class.
///
/// Only the names come from the class file. The email is the student's key in
/// `students_by_email`, and the score buckets are filled by the grade loaders.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Student {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(skip)]
    pub email: String,
    /// Scores per assignment category, in load order
    #[serde(skip)]
    pub grades_by_category: BTreeMap<String, Vec<f64>>,
    /// Count of entries with no score yet, per assignment category
    #[serde(skip)]
    pub unscored_by_category: BTreeMap<String, usize>,
}

impl Student {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// Create an empty score bucket and a zero unscored count for a category.
    /// Existing buckets are left alone.
    pub fn add_category(&mut self, category: &str) {
        self.grades_by_category
            .entry(category.to_string())
            .or_default();
        self.unscored_by_category
            .entry(category.to_string())
            .or_insert(0);
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "Last, First"
    pub fn last_first(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }

    /// Order by last name, then first name. Email breaks remaining ties so
    /// that output never depends on map order.
    pub fn cmp_by_name(&self, other: &Student) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.email.cmp(&other.email))
    }

    pub fn unscored(&self, category: &str) -> usize {
        self.unscored_by_category.get(category).copied().unwrap_or(0)
    }
}
