//! Helpers shared by the term-aware commands

use gradebook_core::error::Result;
use gradebook_core::{Class, Term};

/// Look up the `--term` argument, if one was given.
///
/// The term is cloned out so the class can be mutated by a loader afterwards.
pub fn resolve_term(class: &Class, term: Option<&str>) -> Result<Option<Term>> {
    term.map(|id| class.term(id).cloned()).transpose()
}

/// "assignment" or "assignments"
pub fn pluralize_assignments(count: usize) -> &'static str {
    if count == 1 {
        "assignment"
    } else {
        "assignments"
    }
}
