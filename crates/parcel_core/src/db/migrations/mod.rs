//! Ordered schema steps for the `parcel` table.
//!
//! Step 1 creates the table with `AUTOINCREMENT`, so parcel numbers freed by
//! a delete are never handed out again. Step 2 indexes `client` for
//! per-client listings. The number of the last applied step lives in
//! `PRAGMA user_version`; pending steps run inside one transaction.

use crate::db::{DbError, DbResult};
use log::debug;
use rusqlite::Connection;

/// `(version, sql)` pairs, strictly increasing by version.
const SCHEMA_STEPS: &[(u32, &str)] = &[
    (1, include_str!("0001_parcel.sql")),
    (2, include_str!("0002_parcel_client_index.sql")),
];

/// Schema version this build migrates to.
pub fn latest_version() -> u32 {
    SCHEMA_STEPS.last().map_or(0, |(version, _)| *version)
}

/// Brings the tracker schema on `conn` up to [`latest_version`].
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let on_disk = schema_version(conn)?;
    let target = latest_version();
    if on_disk > target {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: on_disk,
            latest_supported: target,
        });
    }

    let mut pending = SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > on_disk)
        .peekable();
    if pending.peek().is_none() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        debug!("event=db_migrate module=db status=ok from={on_disk} to={version}");
    }
    tx.commit()?;
    Ok(())
}

fn schema_version(conn: &Connection) -> DbResult<u32> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}
