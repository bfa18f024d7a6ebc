//! Accessible-set statistics.
//!
//! # Responsibility
//! - Compute summary counts over an accessible reunion set.
//!
//! # Invariants
//! - `upcoming + past == total` for every input.
//! - `by_status` only carries statuses present in the set; zero counts are
//!   omitted.
//! - Upcoming/past comparisons are date-granular: a reunion earlier today
//!   still counts as upcoming.

use crate::model::reunion::{Reunion, ReunionStatus};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary counts over one accessible reunion set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReunionStatistics {
    /// Number of reunions in the set.
    pub total: u64,
    /// Reunions starting today or later.
    pub upcoming: u64,
    /// Reunions that started before today.
    pub past: u64,
    /// Per-status counts for statuses present in the set.
    pub by_status: BTreeMap<ReunionStatus, u64>,
}

/// Computes statistics over a resolved set against a reference day.
///
/// Pure and deterministic for a fixed `today`.
pub fn compute_statistics(reunions: &[Reunion], today: NaiveDate) -> ReunionStatistics {
    let mut statistics = ReunionStatistics {
        total: reunions.len() as u64,
        ..ReunionStatistics::default()
    };

    for reunion in reunions {
        if reunion.start_at.date() >= today {
            statistics.upcoming += 1;
        } else {
            statistics.past += 1;
        }
        *statistics.by_status.entry(reunion.status).or_insert(0) += 1;
    }

    statistics
}

/// Returns the current local date, the implicit reference day for callers
/// that do not supply one.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
