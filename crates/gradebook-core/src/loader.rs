//! Loading gradebook files into a class
//!
//! Both loaders walk the same files in the same order and fail on the first
//! bad file. `load_grades` appends scores to students' category buckets;
//! `load_unscored` counts the entries that have no score yet.

use std::path::{Path, PathBuf};
use std::time::Instant;

use walkdir::WalkDir;

use crate::class::{Class, Term};
use crate::error::{GradebookError, Result};
use crate::gradebook::{date_from_file_name, Gradebook, GRADEBOOK_EXTENSION};
use crate::trace_time;

/// What a load records for each gradebook entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tally {
    /// Append non-null scores to the category bucket
    Scores,
    /// Count null scores per category
    Unscored,
}

/// List the `.gradebook` files directly inside `dir`, sorted by file name
pub fn gradebook_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(GradebookError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            match e.into_io_error() {
                Some(io) => GradebookError::io(path, io),
                None => GradebookError::Usage(format!("cannot read {}", path.display())),
            }
        })?;

        let is_gradebook = entry
            .path()
            .extension()
            .is_some_and(|ext| ext == GRADEBOOK_EXTENSION);
        if entry.file_type().is_file() && is_gradebook {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

impl Class {
    /// Add the scores from every gradebook file in `dir` to the students.
    ///
    /// With a term, files dated outside it are skipped. Entries without a
    /// score are ignored.
    #[tracing::instrument(skip(self, dir, term), fields(dir = %dir.display()))]
    pub fn load_grades(&mut self, dir: &Path, term: Option<&Term>) -> Result<()> {
        self.load_files(dir, term, Tally::Scores)
    }

    /// Count, per student and category, the gradebook entries in `dir` that
    /// have no score yet.
    #[tracing::instrument(skip(self, dir, term), fields(dir = %dir.display()))]
    pub fn load_unscored(&mut self, dir: &Path, term: Option<&Term>) -> Result<()> {
        self.load_files(dir, term, Tally::Unscored)
    }

    fn load_files(&mut self, dir: &Path, term: Option<&Term>, tally: Tally) -> Result<()> {
        let start = Instant::now();
        let files = gradebook_files(dir)?;
        let mut loaded = 0usize;

        for path in &files {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            let date = date_from_file_name(&file_name)?;

            if let Some(term) = term {
                if !term.includes(date) {
                    tracing::debug!(file = %file_name, date, "skipped_outside_term");
                    continue;
                }
            }

            let gradebook = Gradebook::load(path)?;
            self.tally(&gradebook, tally)?;
            loaded += 1;
        }

        trace_time!(start, "load_gradebooks", files = loaded);
        Ok(())
    }

    fn tally(&mut self, gradebook: &Gradebook, tally: Tally) -> Result<()> {
        for grade in &gradebook.grades {
            let counts = match tally {
                Tally::Scores => grade.score.is_some(),
                Tally::Unscored => grade.score.is_none(),
            };
            if !counts {
                continue;
            }

            let student = self.students_by_email.get_mut(&grade.email).ok_or_else(|| {
                GradebookError::UnknownStudent {
                    email: grade.email.clone(),
                }
            })?;
            let category = self
                .categories_by_assignment_type
                .get(&gradebook.assignment_type)
                .ok_or_else(|| GradebookError::UnknownAssignmentType {
                    assignment_type: gradebook.assignment_type.clone(),
                })?;
            let unknown_category = || GradebookError::UnknownCategory {
                category: category.clone(),
            };

            match grade.score {
                Some(score) => student
                    .grades_by_category
                    .get_mut(category)
                    .ok_or_else(unknown_category)?
                    .push(score),
                None => {
                    *student
                        .unscored_by_category
                        .get_mut(category)
                        .ok_or_else(unknown_category)? += 1
                }
            }
        }
        Ok(())
    }
}
