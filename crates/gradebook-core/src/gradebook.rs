//! Gradebook files
//!
//! One `.gradebook` file holds the scores for one assignment. Its name ends
//! with the assignment date: `<type>-<name>-<YYYYMMDD>.gradebook`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::class::term::{is_valid_date, DATE_LEN};
use crate::class::Class;
use crate::error::{GradebookError, Result};

/// File extension of gradebook files, without the dot
pub const GRADEBOOK_EXTENSION: &str = "gradebook";

/// Suffix stripped before reading the date from a file name
pub const GRADEBOOK_SUFFIX: &str = ".gradebook";

/// Anything outside this class is not allowed in a gradebook name
const INVALID_NAME_PATTERN: &str = r"[^A-Za-z0-9._-]";

static INVALID_NAME_CHARS: OnceLock<Regex> = OnceLock::new();

fn invalid_name_chars() -> Result<&'static Regex> {
    if let Some(re) = INVALID_NAME_CHARS.get() {
        return Ok(re);
    }
    let re = Regex::new(INVALID_NAME_PATTERN).map_err(|e| GradebookError::Usage(e.to_string()))?;
    Ok(INVALID_NAME_CHARS.get_or_init(|| re))
}

/// One student's entry in a gradebook. `None` means not yet scored, which is
/// different from a score of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub email: String,
    #[serde(default, alias = "grade")]
    pub score: Option<f64>,
}

impl Grade {
    pub fn new(email: impl Into<String>, score: Option<f64>) -> Self {
        Self {
            email: email.into(),
            score,
        }
    }
}

/// A single gradebook file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Gradebook {
    pub assignment_category: String,
    pub assignment_date: String,
    pub assignment_name: String,
    pub assignment_type: String,
    #[serde(rename = "assignment_grades", alias = "assignment_records")]
    pub grades: Vec<Grade>,
}

impl Gradebook {
    /// Read and parse a gradebook file
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| GradebookError::io(path, e))?;
        serde_json::from_str(&data).map_err(|source| GradebookError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// A gradebook with an unscored entry for every student, in name order.
    ///
    /// Fails if the class does not know `assignment_type`.
    pub fn blank(class: &Class, assignment_type: &str, name: &str, date: &str) -> Result<Self> {
        let category = class.category_for_type(assignment_type).ok_or_else(|| {
            GradebookError::UnknownAssignmentType {
                assignment_type: assignment_type.to_string(),
            }
        })?;

        let grades = class
            .emails_sorted_by_student_name()
            .into_iter()
            .map(|email| Grade::new(email, None))
            .collect();

        Ok(Self {
            assignment_category: category.to_string(),
            assignment_date: date.to_string(),
            assignment_name: name.to_string(),
            assignment_type: assignment_type.to_string(),
            grades,
        })
    }

    /// `<type>-<name>-<date>.gradebook`
    pub fn file_name(&self) -> String {
        format!(
            "{}-{}-{}{}",
            self.assignment_type, self.assignment_name, self.assignment_date, GRADEBOOK_SUFFIX
        )
    }

    /// Serialize with four-space indentation
    pub fn to_json_pretty(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        buf.push(b'\n');
        Ok(buf)
    }

    /// Write the gradebook into `dir` under its canonical file name.
    ///
    /// The file must not exist yet; an existing file is left untouched and
    /// `FileExists` is returned.
    #[tracing::instrument(skip(self, dir), fields(dir = %dir.display()))]
    pub fn write_new(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name());
        let data = self.to_json_pretty()?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => GradebookError::FileExists { path: path.clone() },
                _ => GradebookError::io(&path, e),
            })?;

        file.write_all(&data)
            .and_then(|()| file.sync_all())
            .map_err(|e| GradebookError::io(&path, e))?;

        tracing::debug!(path = %path.display(), entries = self.grades.len(), "gradebook_created");
        Ok(path)
    }
}

/// Get the YYYYMMDD date from the end of a gradebook file name.
///
/// The `.gradebook` suffix is removed first; the last eight characters of
/// what remains must be a real date.
pub fn date_from_file_name(file_name: &str) -> Result<&str> {
    let stem = file_name.strip_suffix(GRADEBOOK_SUFFIX).unwrap_or(file_name);
    let malformed = || GradebookError::MalformedFilename {
        name: file_name.to_string(),
    };

    let start = stem
        .char_indices()
        .rev()
        .nth(DATE_LEN - 1)
        .map(|(i, _)| i)
        .ok_or_else(malformed)?;
    let date = &stem[start..];

    if !is_valid_date(date) {
        return Err(malformed());
    }
    Ok(date)
}

/// Check a gradebook name: non-empty, only `[A-Za-z0-9._-]`
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || invalid_name_chars()?.is_match(name) {
        crate::bail_invalid!("name", name);
    }
    Ok(())
}

/// Check a gradebook date: a real YYYYMMDD date
pub fn validate_date(date: &str) -> Result<()> {
    if !is_valid_date(date) {
        crate::bail_invalid!("date", date);
    }
    Ok(())
}

/// Check a gradebook type: one the class knows
pub fn validate_type(class: &Class, assignment_type: &str) -> Result<()> {
    if class.category_for_type(assignment_type).is_none() {
        crate::bail_invalid!("type", assignment_type);
    }
    Ok(())
}
