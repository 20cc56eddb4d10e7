use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::types::{CatalogEntry, NewCatalogEntry};

use super::{
    error::{classify_schema_error, classify_write_error},
    CatalogStore, StoreError,
};

const ENTRY_COLUMNS: &str =
    "id, name, origin, price, image_url, description, category, created_at, updated_at";

const RECREATE_SCHEMA: &str = r#"
    DROP TABLE IF EXISTS cheeses;
    CREATE TABLE cheeses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        origin TEXT NOT NULL,
        price REAL NOT NULL,
        image_url TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
        updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
    );
"#;

/// SQLite-backed record store holding one connection for its whole lifetime.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

fn map_entry_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CatalogEntry> {
    Ok(CatalogEntry {
        id: row.get(0)?,
        name: row.get(1)?,
        origin: row.get(2)?,
        price: row.get(3)?,
        image_url: row.get(4)?,
        description: row.get(5)?,
        category: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

fn db_insert(conn: &Connection, entry: &NewCatalogEntry) -> Result<CatalogEntry, StoreError> {
    if let Some(field) = entry.missing_field() {
        return Err(StoreError::Validation { field });
    }

    let sql = format!(
        "INSERT INTO cheeses (name, origin, price, image_url, description, category)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         RETURNING {ENTRY_COLUMNS}"
    );
    conn.query_row(
        &sql,
        params![
            entry.name,
            entry.origin,
            entry.price,
            entry.image_url,
            entry.description,
            entry.category
        ],
        map_entry_row,
    )
    .map_err(classify_write_error)
}

fn db_find_all(conn: &Connection) -> rusqlite::Result<Vec<CatalogEntry>> {
    let mut stmt = conn.prepare(&format!("SELECT {ENTRY_COLUMNS} FROM cheeses ORDER BY id"))?;
    let rows = stmt
        .query_map([], map_entry_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(rows)
}

impl SqliteStore {
    /// Opens (or creates) the database file and checks the connection answers.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path.as_ref()).map_err(StoreError::Connection)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(StoreError::Connection)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(StoreError::Connection)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(StoreError::Connection)?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.busy_timeout(std::time::Duration::from_millis(500))
            .map_err(StoreError::Connection)?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(StoreError::Connection)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    // Writes are single statements or transactions, so a poisoned lock still
    // guards a consistent connection.
    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogStore for SqliteStore {
    fn recreate_schema(&self) -> Result<(), StoreError> {
        self.lock()
            .execute_batch(RECREATE_SCHEMA)
            .map_err(classify_schema_error)
    }

    fn insert_many(&self, entries: &[NewCatalogEntry]) -> Result<Vec<CatalogEntry>, StoreError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        let mut inserted = Vec::with_capacity(entries.len());
        for entry in entries {
            // Dropping `tx` on error rolls the batch back.
            inserted.push(db_insert(&tx, entry)?);
        }
        tx.commit()?;
        Ok(inserted)
    }

    fn insert_one(&self, entry: &NewCatalogEntry) -> Result<CatalogEntry, StoreError> {
        db_insert(&self.lock(), entry)
    }

    fn find_all(&self) -> Result<Vec<CatalogEntry>, StoreError> {
        Ok(db_find_all(&self.lock())?)
    }
}
