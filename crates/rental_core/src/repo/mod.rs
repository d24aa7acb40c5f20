//! Repository layer abstractions and SQLite persistence adapters.
//!
//! # Responsibility
//! - Define the CRUD persistence contract shared by every entity.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Read paths rebuild rows through the entity factory and reject invalid
//!   persisted state instead of masking it.
//! - Adapters refuse connections that have not been migrated.
//! - Each call is independently atomic; there is no cross-repository
//!   transaction.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::Entity;
use chrono::NaiveDate;
use rusqlite::{Connection, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod accident_report_repo;
pub mod customer_repo;
pub mod insurance_repo;
pub mod rental_agent_repo;
pub mod service_record_repo;
pub mod truck_repo;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// No row matched the requested primary key.
    NotFound { entity: &'static str, id: String },
    /// Write rejected by a storage constraint (foreign key, check, unique).
    ConstraintViolation(String),
    /// Persisted row cannot be turned back into a valid entity.
    InvalidData(String),
    /// Connection schema version does not match this binary.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl RepoError {
    pub(crate) fn not_found<E: Entity>(id: &E::Id) -> Self {
        Self::NotFound {
            entity: E::KIND,
            id: id.to_string(),
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::ConstraintViolation(message) => write!(f, "constraint violation: {message}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        match &value {
            rusqlite::Error::SqliteFailure(err, message)
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Self::ConstraintViolation(message.clone().unwrap_or_else(|| err.to_string()))
            }
            _ => Self::Db(DbError::Sqlite(value)),
        }
    }
}

/// CRUD persistence contract, parameterized by entity and its key type.
pub trait CrudRepository {
    type Entity: Entity;

    /// Inserts the entity or overwrites the row with the same key.
    fn save(&self, entity: &Self::Entity) -> RepoResult<Self::Entity>;

    fn find_by_id(&self, id: &<Self::Entity as Entity>::Id) -> RepoResult<Option<Self::Entity>>;

    /// Returns every entity ordered by primary key.
    fn find_all(&self) -> RepoResult<Vec<Self::Entity>>;

    /// Hard-deletes one row. Missing keys yield `RepoError::NotFound`.
    fn delete_by_id(&self, id: &<Self::Entity as Entity>::Id) -> RepoResult<()>;

    fn exists_by_id(&self, id: &<Self::Entity as Entity>::Id) -> RepoResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }
}

/// Checks schema version, table presence and columns before a repository
/// starts using `conn`.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    table: &'static str,
    columns: &[&'static str],
) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, table)? {
        return Err(RepoError::MissingRequiredTable(table));
    }

    for &column in columns {
        if !table_has_column(conn, table, column)? {
            return Err(RepoError::MissingRequiredColumn { table, column });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn parse_date(value: &str, column: &'static str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| RepoError::InvalidData(format!("invalid date `{value}` in {column}")))
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn parse_bool(value: i64, column: &'static str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean value `{other}` in {column}"
        ))),
    }
}

/// Wraps a factory rejection of a stored row.
pub(crate) fn rejected_row<E: Entity>(id: &E::Id) -> RepoError {
    RepoError::InvalidData(format!(
        "{} `{id}` failed validation on read",
        E::KIND
    ))
}
