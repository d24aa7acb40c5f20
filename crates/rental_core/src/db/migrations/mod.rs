//! Versioned rental schema scripts.
//!
//! Scripts run in ascending version order inside one transaction, and the
//! version reached is written to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// (version, script) pairs, strictly ascending.
const MIGRATIONS: &[(u32, &str)] = &[
    (1, include_str!("0001_init.sql")),
    (2, include_str!("0002_lookup_indexes.sql")),
];

/// Schema version this binary writes and expects.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |&(version, _)| version)
}

/// Brings `conn` up to [`latest_version`].
///
/// Returns the version the database was at before the call. Refuses a
/// database from a newer binary, and reports the first failing script as
/// `DbError::Migration` with everything rolled back.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<u32> {
    let from = current_user_version(conn)?;
    let latest = latest_version();
    if from > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from,
            latest_supported: latest,
        });
    }

    let pending: Vec<_> = MIGRATIONS
        .iter()
        .filter(|&&(version, _)| version > from)
        .collect();
    if pending.is_empty() {
        return Ok(from);
    }

    let tx = conn.transaction()?;
    for &&(version, sql) in &pending {
        tx.execute_batch(sql)
            .and_then(|()| tx.pragma_update(None, "user_version", version))
            .map_err(|source| DbError::Migration { version, source })?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={from} to_version={latest}");
    Ok(from)
}

/// Reads the schema version stored in `PRAGMA user_version`.
pub fn current_user_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
