//! The class model
//!
//! A class is read from a `class.json` file once per invocation. It owns every
//! student, and the grade loaders fill the students' score buckets in place.

mod student;
pub mod term;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{GradebookError, Result};
pub use student::Student;
pub use term::Term;

/// Terms by short ID (e.g., "q1" is the first quarter)
pub type TermsById = BTreeMap<String, Term>;

/// Display labels by assignment category (e.g., "cp" is "Class Participation")
pub type LabelsByAssignmentCategory = BTreeMap<String, String>;

/// Percentage weights by assignment category. A valid class's weights sum to 100.
pub type WeightsByAssignmentCategory = BTreeMap<String, i64>;

/// Categories by assignment type (e.g., "test", "essay", and "project" may all
/// be "major"). Every category needs at least one type.
pub type CategoriesByAssignmentType = BTreeMap<String, String>;

pub type StudentsByEmail = BTreeMap<String, Student>;

/// A class and its students.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "ClassFile")]
pub struct Class {
    pub name: String,
    pub terms_by_id: TermsById,
    pub assignment_categories: Vec<String>,
    pub labels_by_assignment_category: LabelsByAssignmentCategory,
    pub weights_by_assignment_category: WeightsByAssignmentCategory,
    pub categories_by_assignment_type: CategoriesByAssignmentType,
    pub students_by_email: StudentsByEmail,
    /// Required fields that were absent or null in the source file
    unset_fields: Vec<&'static str>,
}

/// On-disk shape of a class file. Every mapping is optional so that a missing
/// field can be told apart from an empty one.
#[derive(Debug, Deserialize)]
struct ClassFile {
    #[serde(default)]
    name: Option<String>,
    terms_by_id: Option<TermsById>,
    assignment_categories: Option<Vec<String>>,
    labels_by_assignment_category: Option<LabelsByAssignmentCategory>,
    weights_by_assignment_category: Option<WeightsByAssignmentCategory>,
    categories_by_assignment_type: Option<CategoriesByAssignmentType>,
    students_by_email: Option<StudentsByEmail>,
}

/// Take a required field, noting its name when it is missing
fn required<T: Default>(value: Option<T>, field: &'static str, unset: &mut Vec<&'static str>) -> T {
    value.unwrap_or_else(|| {
        unset.push(field);
        T::default()
    })
}

impl From<ClassFile> for Class {
    fn from(file: ClassFile) -> Self {
        let mut unset = Vec::new();

        let name = file.name.unwrap_or_default();
        if name.is_empty() {
            unset.push("name");
        }
        let terms_by_id = required(file.terms_by_id, "terms_by_id", &mut unset);
        let assignment_categories =
            required(file.assignment_categories, "assignment_categories", &mut unset);
        let labels_by_assignment_category = required(
            file.labels_by_assignment_category,
            "labels_by_assignment_category",
            &mut unset,
        );
        let weights_by_assignment_category = required(
            file.weights_by_assignment_category,
            "weights_by_assignment_category",
            &mut unset,
        );
        let categories_by_assignment_type = required(
            file.categories_by_assignment_type,
            "categories_by_assignment_type",
            &mut unset,
        );
        let mut students_by_email = required(file.students_by_email, "students_by_email", &mut unset);

        for (email, student) in students_by_email.iter_mut() {
            student.email = email.clone();
            for category in &assignment_categories {
                student.add_category(category);
            }
        }

        Class {
            name,
            terms_by_id,
            assignment_categories,
            labels_by_assignment_category,
            weights_by_assignment_category,
            categories_by_assignment_type,
            students_by_email,
            unset_fields: unset,
        }
    }
}

impl Class {
    /// Create an empty class. Fields are filled with the `with_*` builders.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Read and parse a class file
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| GradebookError::io(path, e))?;
        let class: Class = serde_json::from_str(&data).map_err(|source| GradebookError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            name = %class.name,
            students = class.students_by_email.len(),
            categories = class.assignment_categories.len(),
            "class_loaded"
        );

        Ok(class)
    }

    /// Read a class file and reject it unless it passes every check
    pub fn load_checked(path: &Path) -> Result<Self> {
        let class = Self::load(path)?;
        class.check()?;
        class.warn_roster();
        Ok(class)
    }

    pub fn with_term(mut self, id: &str, start: &str, end: &str) -> Self {
        self.terms_by_id.insert(id.to_string(), Term::new(start, end));
        self
    }

    /// Register a category with its label and weight. Every student gets an
    /// empty bucket for it.
    pub fn with_category(mut self, category: &str, label: &str, weight: i64) -> Self {
        self.assignment_categories.push(category.to_string());
        self.labels_by_assignment_category
            .insert(category.to_string(), label.to_string());
        self.weights_by_assignment_category
            .insert(category.to_string(), weight);
        for student in self.students_by_email.values_mut() {
            student.add_category(category);
        }
        self
    }

    pub fn with_type(mut self, assignment_type: &str, category: &str) -> Self {
        self.categories_by_assignment_type
            .insert(assignment_type.to_string(), category.to_string());
        self
    }

    pub fn with_student(mut self, email: &str, first_name: &str, last_name: &str) -> Self {
        let mut student = Student::new(first_name, last_name, email);
        for category in &self.assignment_categories {
            student.add_category(category);
        }
        self.students_by_email.insert(email.to_string(), student);
        self
    }

    /// Required fields that were missing from the class file
    pub fn unset_fields(&self) -> &[&'static str] {
        &self.unset_fields
    }

    /// Look up a term by ID
    pub fn term(&self, id: &str) -> Result<&Term> {
        self.terms_by_id
            .get(id)
            .ok_or_else(|| GradebookError::MissingTerm {
                term: id.to_string(),
            })
    }

    pub fn category_for_type(&self, assignment_type: &str) -> Option<&str> {
        self.categories_by_assignment_type
            .get(assignment_type)
            .map(String::as_str)
    }

    /// Display label for a category, falling back to the category itself
    pub fn label<'a>(&'a self, category: &'a str) -> &'a str {
        self.labels_by_assignment_category
            .get(category)
            .map(String::as_str)
            .unwrap_or(category)
    }

    /// Assignment categories ordered by display label
    pub fn categories_sorted_by_label(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self
            .assignment_categories
            .iter()
            .map(String::as_str)
            .collect();
        categories.sort_by(|a, b| self.label(a).cmp(self.label(b)).then_with(|| a.cmp(b)));
        categories
    }

    /// Students ordered by last name, then first name
    pub fn students_sorted_by_name(&self) -> Vec<&Student> {
        let mut students: Vec<&Student> = self.students_by_email.values().collect();
        students.sort_by(|a, b| a.cmp_by_name(b));
        students
    }

    /// Student emails ordered by their students' names
    pub fn emails_sorted_by_student_name(&self) -> Vec<&str> {
        self.students_sorted_by_name()
            .into_iter()
            .map(|student| student.email.as_str())
            .collect()
    }
}
