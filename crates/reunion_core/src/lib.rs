//! Core domain logic for organizational meeting accessibility.
//! This crate is the single source of truth for visibility invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::personnel::{Personnel, PersonnelId, UserId};
pub use model::reunion::{
    Participation, ParticipationStatus, Reunion, ReunionId, ReunionStatus,
};
pub use model::structure::{is_valid_path_code, Structure, StructureId};
pub use model::ValidationError;
pub use repo::directory_repo::{DirectoryRepository, SqliteDirectoryRepository};
pub use repo::reunion_repo::{ReunionRepository, SqliteReunionRepository};
pub use repo::{RepoError, RepoResult};
pub use service::access_service::{
    AccessError, AccessResult, AccessService, AccessSummary, PersonnelSummary, StructureSummary,
};
pub use service::filter::{ReunionFilter, DEFAULT_RESULT_CAP};
pub use service::stats::{compute_statistics, today, ReunionStatistics};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
