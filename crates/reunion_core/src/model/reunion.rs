//! Meeting ("reunion") and participation models.
//!
//! # Responsibility
//! - Represent scheduled meetings with their organizing structure.
//! - Represent direct invitation links between meetings and personnel.
//!
//! # Invariants
//! - Every reunion is organized by exactly one structure.
//! - A (reunion, personnel) participation pair exists at most once.

use crate::model::personnel::PersonnelId;
use crate::model::structure::StructureId;
use crate::model::ValidationError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a reunion.
pub type ReunionId = Uuid;

/// Lifecycle state of a reunion.
///
/// The vocabulary is fixed here; comparisons elsewhere are by value only.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ReunionStatus {
    /// Scheduled, not yet started.
    Planned,
    /// Currently being held.
    Ongoing,
    /// Held and closed.
    Completed,
    /// Called off.
    Cancelled,
}

/// Response state of a direct invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipationStatus {
    /// Invited, no answer yet.
    Pending,
    /// Confirmed attendance.
    Accepted,
    /// Declined attendance.
    Declined,
}

/// One scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reunion {
    /// Stable global ID referenced by participations.
    pub uuid: ReunionId,
    /// Meeting subject line.
    pub subject: String,
    /// Meeting type label from the admin-managed vocabulary.
    pub kind: String,
    /// Current lifecycle state.
    pub status: ReunionStatus,
    /// Scheduled start, naive institution-local time.
    pub start_at: NaiveDateTime,
    /// Organizing structure.
    pub structure_uuid: StructureId,
}

impl Reunion {
    /// Creates a reunion with a generated stable ID.
    pub fn new(
        subject: impl Into<String>,
        kind: impl Into<String>,
        status: ReunionStatus,
        start_at: NaiveDateTime,
        structure_uuid: StructureId,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), subject, kind, status, start_at, structure_uuid)
    }

    /// Creates a reunion with a caller-provided stable ID.
    pub fn with_id(
        uuid: ReunionId,
        subject: impl Into<String>,
        kind: impl Into<String>,
        status: ReunionStatus,
        start_at: NaiveDateTime,
        structure_uuid: StructureId,
    ) -> Self {
        Self {
            uuid,
            subject: subject.into(),
            kind: kind.into(),
            status,
            start_at,
            structure_uuid,
        }
    }

    /// Checks subject and kind labels.
    ///
    /// # Errors
    /// - `BlankField` when the subject or kind label is empty after trim.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "reunion",
                field: "subject",
            });
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "reunion",
                field: "kind",
            });
        }
        Ok(())
    }
}

/// Direct invitation link between one reunion and one staff member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    /// Invited-to reunion.
    pub reunion_uuid: ReunionId,
    /// Invited staff member.
    pub personnel_uuid: PersonnelId,
    /// Invitation response state.
    pub status: ParticipationStatus,
    /// Free-form justification when the member declined.
    pub absence_reason: Option<String>,
}

impl Participation {
    /// Creates a pending participation with no absence reason.
    pub fn new(reunion_uuid: ReunionId, personnel_uuid: PersonnelId) -> Self {
        Self {
            reunion_uuid,
            personnel_uuid,
            status: ParticipationStatus::Pending,
            absence_reason: None,
        }
    }
}
