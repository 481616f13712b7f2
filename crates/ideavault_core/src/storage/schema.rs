//! SQLite connection setup for the key-value table.
//!
//! # Invariants
//! - A connection is handed out only after `kv_entries` exists at
//!   `SCHEMA_VERSION`.
//! - The schema version lives in `PRAGMA user_version`; a file stamped by a
//!   newer build is refused rather than downgraded.

use super::{StorageError, StorageResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Schema steps as `(version, sql)`, strictly increasing.
const SCHEMA_STEPS: &[(u32, &str)] = &[(1, include_str!("kv_entries.sql"))];

/// Version a freshly prepared connection reports.
pub const SCHEMA_VERSION: u32 = 1;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens or creates the database file at `path`, creating parent directories.
pub fn open_file(path: &Path) -> StorageResult<Connection> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        // A missing directory surfaces as CannotOpen from SQLite below.
        let _ = std::fs::create_dir_all(parent);
    }
    connect("file", || Connection::open(path))
}

/// Opens a private in-memory database.
pub fn open_memory() -> StorageResult<Connection> {
    connect("memory", Connection::open_in_memory)
}

/// Reads the schema version stamped on `conn`.
pub fn schema_version(conn: &Connection) -> StorageResult<u32> {
    Ok(conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?)
}

fn connect(
    mode: &'static str,
    open: impl FnOnce() -> rusqlite::Result<Connection>,
) -> StorageResult<Connection> {
    let started_at = Instant::now();
    let prepared = open()
        .map_err(StorageError::from)
        .and_then(|mut conn| prepare(&mut conn).map(|()| conn));

    match &prepared {
        Ok(_) => info!(
            "event=kv_open module=storage status=ok mode={} duration_ms={}",
            mode,
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=kv_open module=storage status=error mode={} duration_ms={} error_code={} error={}",
            mode,
            started_at.elapsed().as_millis(),
            err.code(),
            err
        ),
    }
    prepared
}

fn prepare(conn: &mut Connection) -> StorageResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;

    let found = schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(StorageError::SchemaTooNew {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    let pending: Vec<_> = SCHEMA_STEPS
        .iter()
        .filter(|(version, _)| *version > found)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!(
        "event=kv_schema module=storage status=ok from_version={} to_version={}",
        found, SCHEMA_VERSION
    );
    Ok(())
}
