//! Reunion repository: meeting queries and seeding.
//!
//! # Responsibility
//! - Provide the three independent accessibility query sources: direct
//!   participation, organizing structure, and hierarchical path match.
//! - Provide validated create operations for reunions and participations.
//!
//! # Invariants
//! - Every list query is ordered `start_at DESC, uuid ASC` so equal start
//!   times stay deterministic.
//! - The hierarchical match is prefix-exact: `path_code = ?1 OR path_code
//!   LIKE ?1 || '/%'`, never a bare substring match.

use crate::model::personnel::PersonnelId;
use crate::model::reunion::{
    Participation, ParticipationStatus, Reunion, ReunionId, ReunionStatus,
};
use crate::model::structure::StructureId;
use crate::repo::{ensure_migrated, ensure_table, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const REUNION_SELECT_SQL: &str = "SELECT
    r.uuid AS uuid,
    r.subject AS subject,
    r.kind AS kind,
    r.status AS status,
    r.start_at AS start_at,
    r.structure_uuid AS structure_uuid
FROM reunions r";

const REUNION_ORDER_SQL: &str = "ORDER BY r.start_at DESC, r.uuid ASC";

/// Repository interface for reunion queries and seeding.
pub trait ReunionRepository {
    /// Creates one reunion and returns its stable id.
    fn create_reunion(&self, reunion: &Reunion) -> RepoResult<ReunionId>;
    /// Records one direct invitation.
    fn add_participation(&self, participation: &Participation) -> RepoResult<()>;
    /// Lists reunions the given personnel is directly invited to.
    fn list_by_participant(&self, personnel_id: PersonnelId) -> RepoResult<Vec<Reunion>>;
    /// Lists reunions organized by one specific structure.
    fn list_by_structure(&self, structure_id: StructureId) -> RepoResult<Vec<Reunion>>;
    /// Lists reunions organized by any structure at or below `path_code`.
    fn list_under_path(&self, path_code: &str) -> RepoResult<Vec<Reunion>>;
}

/// SQLite-backed reunion repository.
pub struct SqliteReunionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReunionRepository<'conn> {
    /// Wraps a migrated connection after verifying the reunion schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_migrated(conn)?;
        ensure_table(
            conn,
            "reunions",
            &["uuid", "subject", "kind", "status", "start_at", "structure_uuid"],
        )?;
        ensure_table(
            conn,
            "participations",
            &["reunion_uuid", "personnel_uuid", "status", "absence_reason"],
        )?;
        Ok(Self { conn })
    }

    fn exists(&self, table: &str, uuid: &str) -> RepoResult<bool> {
        let found: i64 = self.conn.query_row(
            &format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE uuid = ?1);"),
            [uuid],
            |row| row.get(0),
        )?;
        Ok(found == 1)
    }

    fn list(&self, sql: &str, bind: &str) -> RepoResult<Vec<Reunion>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query([bind])?;
        let mut reunions = Vec::new();

        while let Some(row) = rows.next()? {
            reunions.push(parse_reunion_row(row)?);
        }

        Ok(reunions)
    }
}

impl ReunionRepository for SqliteReunionRepository<'_> {
    fn create_reunion(&self, reunion: &Reunion) -> RepoResult<ReunionId> {
        reunion.validate()?;

        if !self.exists("structures", &reunion.structure_uuid.to_string())? {
            return Err(RepoError::NotFound {
                entity: "structure",
                id: reunion.structure_uuid,
            });
        }

        self.conn.execute(
            "INSERT INTO reunions (uuid, subject, kind, status, start_at, structure_uuid)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                reunion.uuid.to_string(),
                reunion.subject.as_str(),
                reunion.kind.as_str(),
                status_to_db(reunion.status),
                reunion.start_at,
                reunion.structure_uuid.to_string(),
            ],
        )?;

        Ok(reunion.uuid)
    }

    fn add_participation(&self, participation: &Participation) -> RepoResult<()> {
        if !self.exists("reunions", &participation.reunion_uuid.to_string())? {
            return Err(RepoError::NotFound {
                entity: "reunion",
                id: participation.reunion_uuid,
            });
        }
        if !self.exists("personnels", &participation.personnel_uuid.to_string())? {
            return Err(RepoError::NotFound {
                entity: "personnel",
                id: participation.personnel_uuid,
            });
        }

        self.conn.execute(
            "INSERT INTO participations (reunion_uuid, personnel_uuid, status, absence_reason)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                participation.reunion_uuid.to_string(),
                participation.personnel_uuid.to_string(),
                participation_status_to_db(participation.status),
                participation.absence_reason.as_deref(),
            ],
        )?;

        Ok(())
    }

    fn list_by_participant(&self, personnel_id: PersonnelId) -> RepoResult<Vec<Reunion>> {
        self.list(
            &format!(
                "{REUNION_SELECT_SQL}
                 JOIN participations p ON p.reunion_uuid = r.uuid
                 WHERE p.personnel_uuid = ?1
                 {REUNION_ORDER_SQL};"
            ),
            &personnel_id.to_string(),
        )
    }

    fn list_by_structure(&self, structure_id: StructureId) -> RepoResult<Vec<Reunion>> {
        self.list(
            &format!(
                "{REUNION_SELECT_SQL}
                 WHERE r.structure_uuid = ?1
                 {REUNION_ORDER_SQL};"
            ),
            &structure_id.to_string(),
        )
    }

    fn list_under_path(&self, path_code: &str) -> RepoResult<Vec<Reunion>> {
        self.list(
            &format!(
                "{REUNION_SELECT_SQL}
                 JOIN structures s ON s.uuid = r.structure_uuid
                 WHERE s.path_code = ?1 OR s.path_code LIKE ?1 || '/%'
                 {REUNION_ORDER_SQL};"
            ),
            path_code,
        )
    }
}

fn parse_reunion_row(row: &Row<'_>) -> RepoResult<Reunion> {
    let uuid_text: String = row.get("uuid")?;
    let structure_text: String = row.get("structure_uuid")?;

    let status_text: String = row.get("status")?;
    let status = parse_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{status_text}` in reunions.status"))
    })?;

    let reunion = Reunion {
        uuid: parse_uuid(&uuid_text, "reunions.uuid")?,
        subject: row.get("subject")?,
        kind: row.get("kind")?,
        status,
        start_at: row.get("start_at")?,
        structure_uuid: parse_uuid(&structure_text, "reunions.structure_uuid")?,
    };
    reunion.validate()?;
    Ok(reunion)
}

fn status_to_db(status: ReunionStatus) -> &'static str {
    match status {
        ReunionStatus::Planned => "planned",
        ReunionStatus::Ongoing => "ongoing",
        ReunionStatus::Completed => "completed",
        ReunionStatus::Cancelled => "cancelled",
    }
}

fn parse_status(value: &str) -> Option<ReunionStatus> {
    match value {
        "planned" => Some(ReunionStatus::Planned),
        "ongoing" => Some(ReunionStatus::Ongoing),
        "completed" => Some(ReunionStatus::Completed),
        "cancelled" => Some(ReunionStatus::Cancelled),
        _ => None,
    }
}

fn participation_status_to_db(status: ParticipationStatus) -> &'static str {
    match status {
        ParticipationStatus::Pending => "pending",
        ParticipationStatus::Accepted => "accepted",
        ParticipationStatus::Declined => "declined",
    }
}
