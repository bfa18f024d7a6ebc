//! Accessibility resolution service.
//!
//! # Responsibility
//! - Compute the set of reunions one staff member may view.
//! - Expose the narrower companion projections (direct-only, by structure,
//!   under an arbitrary path) plus filtered and summarized variants.
//!
//! # Invariants
//! - A reunion is accessible when the member is directly invited, when it is
//!   organized by the member's home structure, or when it is organized by a
//!   structure nested below the home structure's path code.
//! - A member without a home structure only sees direct invitations.
//! - Results are de-duplicated and ordered `start_at DESC, uuid ASC`.
//! - Resolution never mutates any record.

use crate::model::personnel::{Personnel, PersonnelId, UserId};
use crate::model::reunion::Reunion;
use crate::model::structure::{is_valid_path_code, StructureId};
use crate::repo::directory_repo::DirectoryRepository;
use crate::repo::reunion_repo::ReunionRepository;
use crate::repo::RepoError;
use crate::service::filter::ReunionFilter;
use crate::service::stats::{compute_statistics, ReunionStatistics};
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AccessResult<T> = Result<T, AccessError>;

/// Errors from accessibility resolution entry points.
#[derive(Debug)]
pub enum AccessError {
    /// The personnel id does not resolve to any staff member.
    PersonnelNotFound(PersonnelId),
    /// The account id is not linked to any staff member.
    UserNotLinked(UserId),
    /// The structure id does not resolve to any organizational unit.
    StructureNotFound(StructureId),
    /// The caller entry point was used without an authenticated identity.
    Unauthenticated,
    /// The supplied path code violates the hierarchy grammar.
    InvalidPathCode(String),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PersonnelNotFound(id) => write!(f, "personnel not found: {id}"),
            Self::UserNotLinked(id) => write!(f, "no personnel linked to account: {id}"),
            Self::StructureNotFound(id) => write!(f, "structure not found: {id}"),
            Self::Unauthenticated => write!(f, "caller identity is missing"),
            Self::InvalidPathCode(code) => write!(f, "invalid path code: `{code}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AccessError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Boundary view of a structure inside an access summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSummary {
    pub uuid: StructureId,
    pub name: String,
    pub path_code: String,
}

/// Boundary view of the staff member an access summary was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonnelSummary {
    pub uuid: PersonnelId,
    pub display_name: String,
    pub structure: Option<StructureSummary>,
}

/// Staff summary plus statistics over their accessible set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessSummary {
    pub personnel: PersonnelSummary,
    pub statistics: ReunionStatistics,
}

/// Read-side service resolving reunion visibility for staff members.
pub struct AccessService<D: DirectoryRepository, R: ReunionRepository> {
    directory: D,
    reunions: R,
}

impl<D: DirectoryRepository, R: ReunionRepository> AccessService<D, R> {
    /// Creates a service over the provided repository implementations.
    pub fn new(directory: D, reunions: R) -> Self {
        Self { directory, reunions }
    }

    /// Resolves the accessible set for a staff member located by id.
    ///
    /// # Errors
    /// - `PersonnelNotFound` when the id does not resolve; an empty result
    ///   is valid and distinct from this error.
    pub fn accessible_for_personnel(&self, id: PersonnelId) -> AccessResult<Vec<Reunion>> {
        let personnel = self
            .directory
            .get_personnel(id)?
            .ok_or(AccessError::PersonnelNotFound(id))?;
        self.resolve(&personnel)
    }

    /// Resolves the accessible set for the staff member linked to an
    /// authentication account.
    ///
    /// # Errors
    /// - `UserNotLinked` when no personnel carries the account id.
    pub fn accessible_for_user(&self, user_id: UserId) -> AccessResult<Vec<Reunion>> {
        let personnel = self.lookup_by_user(user_id)?;
        self.resolve(&personnel)
    }

    /// Resolves the accessible set for the authenticated caller.
    ///
    /// # Errors
    /// - `Unauthenticated` when no caller identity is supplied.
    /// - `UserNotLinked` when the identity has no personnel record.
    pub fn accessible_for_caller(&self, caller: Option<UserId>) -> AccessResult<Vec<Reunion>> {
        let user_id = caller.ok_or(AccessError::Unauthenticated)?;
        self.accessible_for_user(user_id)
    }

    /// Returns only direct-invitation reunions for an account, excluding all
    /// organizational and hierarchical visibility.
    pub fn direct_only_for_user(&self, user_id: UserId) -> AccessResult<Vec<Reunion>> {
        let personnel = self.lookup_by_user(user_id)?;
        Ok(self.reunions.list_by_participant(personnel.uuid)?)
    }

    /// Returns reunions organized by one specific structure.
    ///
    /// # Errors
    /// - `StructureNotFound` when the id does not resolve.
    pub fn organized_by_structure(&self, id: StructureId) -> AccessResult<Vec<Reunion>> {
        if self.directory.get_structure(id)?.is_none() {
            return Err(AccessError::StructureNotFound(id));
        }
        Ok(self.reunions.list_by_structure(id)?)
    }

    /// Returns reunions organized by any structure at or below `path_code`.
    ///
    /// # Errors
    /// - `InvalidPathCode` when the code violates the hierarchy grammar.
    pub fn organized_under_path(&self, path_code: &str) -> AccessResult<Vec<Reunion>> {
        if !is_valid_path_code(path_code) {
            return Err(AccessError::InvalidPathCode(path_code.to_string()));
        }
        Ok(self.reunions.list_under_path(path_code)?)
    }

    /// Resolves an account's accessible set, then applies `filter`.
    pub fn filtered_for_user(
        &self,
        user_id: UserId,
        filter: &ReunionFilter,
    ) -> AccessResult<Vec<Reunion>> {
        Ok(filter.apply(self.accessible_for_user(user_id)?))
    }

    /// Resolves an account's accessible set, then summarizes it against a
    /// reference day.
    pub fn summary_for_user(&self, user_id: UserId, today: NaiveDate) -> AccessResult<AccessSummary> {
        let personnel = self.lookup_by_user(user_id)?;
        let accessible = self.resolve(&personnel)?;

        let structure = match personnel.structure_uuid {
            Some(structure_uuid) => {
                let structure = self
                    .directory
                    .get_structure(structure_uuid)?
                    .ok_or(AccessError::StructureNotFound(structure_uuid))?;
                Some(StructureSummary {
                    uuid: structure.uuid,
                    name: structure.name,
                    path_code: structure.path_code,
                })
            }
            None => None,
        };

        Ok(AccessSummary {
            personnel: PersonnelSummary {
                uuid: personnel.uuid,
                display_name: personnel.display_name,
                structure,
            },
            statistics: compute_statistics(&accessible, today),
        })
    }

    fn lookup_by_user(&self, user_id: UserId) -> AccessResult<Personnel> {
        self.directory
            .get_personnel_by_user(user_id)?
            .ok_or(AccessError::UserNotLinked(user_id))
    }

    /// Unions the three accessibility sources for one staff member.
    ///
    /// Rule 2 (same-structure organizer) is queried on its own even though
    /// the path match subsumes it; keeping the three sources independent
    /// keeps each rule testable in isolation.
    fn resolve(&self, personnel: &Personnel) -> AccessResult<Vec<Reunion>> {
        let mut accessible = self.reunions.list_by_participant(personnel.uuid)?;

        if let Some(structure_uuid) = personnel.structure_uuid {
            let structure = self
                .directory
                .get_structure(structure_uuid)?
                .ok_or(AccessError::StructureNotFound(structure_uuid))?;

            accessible.extend(self.reunions.list_by_structure(structure_uuid)?);
            accessible.extend(self.reunions.list_under_path(&structure.path_code)?);
        }

        accessible.sort_by(|a, b| b.start_at.cmp(&a.start_at).then(a.uuid.cmp(&b.uuid)));
        accessible.dedup_by_key(|reunion| reunion.uuid);

        debug!(
            "event=access_resolve module=service status=ok personnel={} count={}",
            personnel.uuid,
            accessible.len()
        );

        Ok(accessible)
    }
}
