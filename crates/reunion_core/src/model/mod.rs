//! Domain model for organizational meeting tracking.
//!
//! # Responsibility
//! - Define the canonical records: structures, personnel, reunions and
//!   participations.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every record is identified by a stable UUID.
//! - A structure's hierarchical position is encoded in its slash-delimited
//!   path code; ancestry checks are prefix-exact, never substring-based.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod personnel;
pub mod reunion;
pub mod structure;

/// Validation failure raised before any record reaches persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    BlankField {
        entity: &'static str,
        field: &'static str,
    },
    /// The structure path code does not match the segment grammar.
    InvalidPathCode(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField { entity, field } => {
                write!(f, "{entity} {field} must not be blank")
            }
            Self::InvalidPathCode(code) => write!(
                f,
                "path code `{code}` is not a valid slash-delimited hierarchy code"
            ),
        }
    }
}

impl Error for ValidationError {}
