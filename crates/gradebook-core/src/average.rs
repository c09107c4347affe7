//! Per-category and weighted overall averages

use std::fmt;

use serde::{Serialize, Serializer};

use crate::class::{Student, WeightsByAssignmentCategory};
use crate::error::{GradebookError, Result};

/// The result of averaging a student's scores.
///
/// An invalid result means there was nothing to average. That is different
/// from a valid average of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageResult {
    pub value: f64,
    pub valid: bool,
}

impl AverageResult {
    pub fn of(value: f64) -> Self {
        Self { value, valid: true }
    }

    pub fn invalid() -> Self {
        Self {
            value: 0.0,
            valid: false,
        }
    }

    /// The value, if there is one
    pub fn get(&self) -> Option<f64> {
        self.valid.then_some(self.value)
    }
}

impl fmt::Display for AverageResult {
    /// Shortest decimal that round-trips, or "No results"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("No results"),
        }
    }
}

impl Serialize for AverageResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl Student {
    /// Average of the student's scores in one category.
    ///
    /// Errors if the student has no bucket for the category. Returns an
    /// invalid result if the bucket is empty.
    pub fn average(&self, category: &str) -> Result<AverageResult> {
        let scores =
            self.grades_by_category
                .get(category)
                .ok_or_else(|| GradebookError::UnknownCategory {
                    category: category.to_string(),
                })?;

        if scores.is_empty() {
            return Ok(AverageResult::invalid());
        }

        Ok(AverageResult::of(mean(scores)))
    }

    /// Weighted average over every category that has at least one score.
    ///
    /// Categories without scores drop out along with their weight, so the
    /// total is divided by the weight actually used rather than by 100. The
    /// result is invalid when no category has a score.
    pub fn total_average(&self, weights: &WeightsByAssignmentCategory) -> Result<AverageResult> {
        let mut summed_average = 0.0;
        let mut summed_weight: i128 = 0;

        for (category, &weight) in weights {
            let average = self.average(category)?;
            if let Some(value) = average.get() {
                summed_average += value * weight as f64;
                summed_weight += i128::from(weight);
            }
        }

        if summed_weight == 0 {
            return Ok(AverageResult::invalid());
        }

        Ok(AverageResult::of(summed_average / summed_weight as f64))
    }
}

/// Arithmetic mean. Callers guarantee `scores` is non-empty.
fn mean(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}
