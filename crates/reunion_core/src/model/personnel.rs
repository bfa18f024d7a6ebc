//! Staff member ("personnel") model.
//!
//! # Responsibility
//! - Represent one staff member and their optional home structure.
//! - Carry the optional link to an authentication account.
//!
//! # Invariants
//! - A personnel without a home structure has no hierarchical reach; only
//!   direct invitations make meetings visible to them.
//! - `user_uuid` is unique across personnel when present.

use crate::model::structure::StructureId;
use crate::model::ValidationError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a staff member.
pub type PersonnelId = Uuid;

/// Identifier of an authentication account owned by the auth collaborator.
pub type UserId = Uuid;

/// One staff member of the institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personnel {
    /// Stable global ID referenced by participations.
    pub uuid: PersonnelId,
    /// Full display name.
    pub display_name: String,
    /// Home organizational unit, when attached to one.
    pub structure_uuid: Option<StructureId>,
    /// Linked authentication account, when the member can sign in.
    pub user_uuid: Option<UserId>,
}

impl Personnel {
    /// Creates a personnel record with a generated stable ID and no links.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), display_name)
    }

    /// Creates a personnel record with a caller-provided stable ID.
    pub fn with_id(uuid: PersonnelId, display_name: impl Into<String>) -> Self {
        Self {
            uuid,
            display_name: display_name.into(),
            structure_uuid: None,
            user_uuid: None,
        }
    }

    /// Checks the display name.
    ///
    /// # Errors
    /// - `BlankField` when the display name is empty after trim.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.display_name.trim().is_empty() {
            return Err(ValidationError::BlankField {
                entity: "personnel",
                field: "display_name",
            });
        }
        Ok(())
    }
}
