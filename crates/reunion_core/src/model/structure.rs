//! Organizational unit ("structure") model.
//!
//! # Responsibility
//! - Represent one node of the institutional hierarchy.
//! - Own the path-code grammar and the prefix-exact ancestry check.
//!
//! # Invariants
//! - `path_code` is one or more `/`-joined segments in ancestor-to-descendant
//!   order; the prefix up to any `/` boundary is an ancestor's own code.
//! - Segments never contain `/`, whitespace, `%` or `_`, so the code can be
//!   used verbatim in a SQL `LIKE code || '/%'` predicate.

use crate::model::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an organizational unit.
pub type StructureId = Uuid;

static PATH_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9-]+(/[A-Za-z0-9-]+)*$").expect("path code pattern is valid")
});

/// Returns whether `code` matches the path-code grammar.
pub fn is_valid_path_code(code: &str) -> bool {
    PATH_CODE_RE.is_match(code)
}

/// One node of the organizational hierarchy (ministry, directorate, service).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Stable global ID referenced by personnel and reunions.
    pub uuid: StructureId,
    /// Human-readable unit name.
    pub name: String,
    /// Slash-delimited hierarchy code, e.g. `MINESEC/SDEC/DRES`.
    pub path_code: String,
}

impl Structure {
    /// Creates a structure with a generated stable ID.
    pub fn new(name: impl Into<String>, path_code: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, path_code)
    }

    /// Creates a structure with a caller-provided stable ID.
    pub fn with_id(
        uuid: StructureId,
        name: impl Into<String>,
        path_code: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            name: name.into(),
            path_code: path_code.into(),
        }
    }

    /// Checks name and path-code grammar.
    ///
    /// # Errors
    /// - `BlankField` when the name is empty after trim.
    /// - `InvalidPathCode` when the path code violates the segment grammar.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "structure",
                field: "name",
            });
        }
        if !is_valid_path_code(&self.path_code) {
            return Err(ValidationError::InvalidPathCode(self.path_code.clone()));
        }
        Ok(())
    }

    /// Returns whether a unit with `path_code` sits at or below this unit.
    ///
    /// The check is prefix-exact: `A` covers `A` and `A/B`, but never `AB`.
    pub fn covers(&self, path_code: &str) -> bool {
        path_code == self.path_code || path_code.starts_with(&format!("{}/", self.path_code))
    }
}
