//! Post-resolution reunion filtering.
//!
//! # Responsibility
//! - Narrow an already-resolved accessible set by optional predicates.
//!
//! # Invariants
//! - Predicates combine as a logical AND; each is independently omittable.
//! - Input ordering is preserved; no reunion is ever mutated.
//! - The result cap applies strictly after filtering.

use crate::model::reunion::{Reunion, ReunionStatus};
use chrono::NaiveDateTime;

/// Cap applied when the caller does not request an explicit limit.
pub const DEFAULT_RESULT_CAP: usize = 50;

/// Optional predicates over a resolved accessible set.
///
/// The default value keeps every reunion and applies only the default cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReunionFilter {
    /// Keep reunions starting at or after this instant.
    pub start_from: Option<NaiveDateTime>,
    /// Keep reunions starting at or before this instant.
    pub start_until: Option<NaiveDateTime>,
    /// Keep reunions with exactly this status.
    pub status: Option<ReunionStatus>,
    /// Maximum rows to return. Defaults to [`DEFAULT_RESULT_CAP`].
    pub limit: Option<usize>,
}

impl ReunionFilter {
    /// Returns whether one reunion passes every present predicate.
    pub fn matches(&self, reunion: &Reunion) -> bool {
        if let Some(start_from) = self.start_from {
            if reunion.start_at < start_from {
                return false;
            }
        }
        if let Some(start_until) = self.start_until {
            if reunion.start_at > start_until {
                return false;
            }
        }
        if let Some(status) = self.status {
            if reunion.status != status {
                return false;
            }
        }
        true
    }

    /// Applies the filter and cap over a resolved set.
    ///
    /// Output keeps the input's relative order. Applying the same filter to
    /// its own output returns it unchanged.
    pub fn apply(&self, reunions: Vec<Reunion>) -> Vec<Reunion> {
        let mut kept: Vec<Reunion> = reunions
            .into_iter()
            .filter(|reunion| self.matches(reunion))
            .collect();
        kept.truncate(self.limit.unwrap_or(DEFAULT_RESULT_CAP));
        kept
    }
}
