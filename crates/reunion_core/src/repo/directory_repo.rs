//! Directory repository: structures and personnel lookup.
//!
//! # Responsibility
//! - Provide lookup APIs used by the accessibility resolver to locate staff
//!   members and their home structures.
//! - Provide validated create operations for seeding directory data.
//!
//! # Invariants
//! - Write paths call model `validate()` before SQL mutations.
//! - `personnels.user_uuid` holds at most one personnel per account.

use crate::model::personnel::{Personnel, PersonnelId, UserId};
use crate::model::structure::{Structure, StructureId};
use crate::repo::{ensure_migrated, ensure_table, parse_uuid, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const STRUCTURE_SELECT_SQL: &str = "SELECT uuid, name, path_code FROM structures";

const PERSONNEL_SELECT_SQL: &str = "SELECT
    uuid,
    display_name,
    structure_uuid,
    user_uuid
FROM personnels";

/// Repository interface for directory lookups and seeding.
pub trait DirectoryRepository {
    /// Creates one structure and returns its stable id.
    fn create_structure(&self, structure: &Structure) -> RepoResult<StructureId>;
    /// Creates one personnel record and returns its stable id.
    fn create_personnel(&self, personnel: &Personnel) -> RepoResult<PersonnelId>;
    /// Gets one structure by id.
    fn get_structure(&self, id: StructureId) -> RepoResult<Option<Structure>>;
    /// Gets one personnel by id.
    fn get_personnel(&self, id: PersonnelId) -> RepoResult<Option<Personnel>>;
    /// Gets the personnel linked to an authentication account.
    fn get_personnel_by_user(&self, user_id: UserId) -> RepoResult<Option<Personnel>>;
}

/// SQLite-backed directory repository.
pub struct SqliteDirectoryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDirectoryRepository<'conn> {
    /// Wraps a migrated connection after verifying the directory schema.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations have not been applied.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` on schema drift.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_migrated(conn)?;
        ensure_table(conn, "structures", &["uuid", "name", "path_code"])?;
        ensure_table(
            conn,
            "personnels",
            &["uuid", "display_name", "structure_uuid", "user_uuid"],
        )?;
        Ok(Self { conn })
    }
}

impl DirectoryRepository for SqliteDirectoryRepository<'_> {
    fn create_structure(&self, structure: &Structure) -> RepoResult<StructureId> {
        structure.validate()?;

        self.conn.execute(
            "INSERT INTO structures (uuid, name, path_code) VALUES (?1, ?2, ?3);",
            params![
                structure.uuid.to_string(),
                structure.name.as_str(),
                structure.path_code.as_str(),
            ],
        )?;

        Ok(structure.uuid)
    }

    fn create_personnel(&self, personnel: &Personnel) -> RepoResult<PersonnelId> {
        personnel.validate()?;

        if let Some(structure_uuid) = personnel.structure_uuid {
            if self.get_structure(structure_uuid)?.is_none() {
                return Err(RepoError::NotFound {
                    entity: "structure",
                    id: structure_uuid,
                });
            }
        }

        self.conn.execute(
            "INSERT INTO personnels (uuid, display_name, structure_uuid, user_uuid)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                personnel.uuid.to_string(),
                personnel.display_name.as_str(),
                personnel.structure_uuid.map(|id| id.to_string()),
                personnel.user_uuid.map(|id| id.to_string()),
            ],
        )?;

        Ok(personnel.uuid)
    }

    fn get_structure(&self, id: StructureId) -> RepoResult<Option<Structure>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{STRUCTURE_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_structure_row(row)?));
        }

        Ok(None)
    }

    fn get_personnel(&self, id: PersonnelId) -> RepoResult<Option<Personnel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSONNEL_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_personnel_row(row)?));
        }

        Ok(None)
    }

    fn get_personnel_by_user(&self, user_id: UserId) -> RepoResult<Option<Personnel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PERSONNEL_SELECT_SQL} WHERE user_uuid = ?1;"))?;

        let mut rows = stmt.query([user_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_personnel_row(row)?));
        }

        Ok(None)
    }
}

fn parse_structure_row(row: &Row<'_>) -> RepoResult<Structure> {
    let uuid_text: String = row.get("uuid")?;
    let structure = Structure {
        uuid: parse_uuid(&uuid_text, "structures.uuid")?,
        name: row.get("name")?,
        path_code: row.get("path_code")?,
    };
    structure.validate()?;
    Ok(structure)
}

fn parse_personnel_row(row: &Row<'_>) -> RepoResult<Personnel> {
    let uuid_text: String = row.get("uuid")?;

    let structure_uuid = match row.get::<_, Option<String>>("structure_uuid")? {
        Some(value) => Some(parse_uuid(&value, "personnels.structure_uuid")?),
        None => None,
    };
    let user_uuid = match row.get::<_, Option<String>>("user_uuid")? {
        Some(value) => Some(parse_uuid(&value, "personnels.user_uuid")?),
        None => None,
    };

    let personnel = Personnel {
        uuid: parse_uuid(&uuid_text, "personnels.uuid")?,
        display_name: row.get("display_name")?,
        structure_uuid,
        user_uuid,
    };
    personnel.validate()?;
    Ok(personnel)
}
