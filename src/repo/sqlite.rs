use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;
use rusqlite::{Connection, OptionalExtension, params};

use super::Storage;

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    pub fn open_default() -> Result<Self> {
        let path = default_db_path()?;
        Self::open(path)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create db dir {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open db {}", path.display()))?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()
        {
            Ok(value) => value,
            Err(e) => {
                // Unreadable state counts as absent; the store loads empty.
                warn!("failed to read key {key}: {e}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2) \
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .with_context(|| format!("failed to write key {key}"))?;
        Ok(())
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
PRAGMA journal_mode=WAL;
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);
"#,
    )
    .context("failed to initialize schema")?;
    Ok(())
}

fn default_db_path() -> Result<PathBuf> {
    let base = dirs::data_dir().context("failed to resolve data dir")?;
    Ok(base.join("tana").join("tasks.sqlite"))
}
