//! Armazenamento em SQLite.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::codec::{decode_numbers, encode_numbers};
use super::{ensure_storable, DrawStore, InsertOutcome};
use crate::types::{ConcursosError, ConcursosResult, DrawRecord, StoredDraw};

/// Armazenamento de concursos em um arquivo SQLite.
///
/// A unicidade por concurso é garantida pela chave primária da tabela,
/// o que também vale entre processos que compartilham o arquivo.
pub struct SqliteDrawStore {
    conn: Mutex<Connection>,
}

impl SqliteDrawStore {
    /// Cria ou abre o banco de concursos.
    pub fn open(db_path: &Path) -> ConcursosResult<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(db_path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Self::with_connection(conn)
    }

    /// Banco temporário, sem arquivo.
    pub fn in_memory() -> ConcursosResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> ConcursosResult<Self> {
        // Cria a tabela se não existir
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS draws (
                identifier TEXT PRIMARY KEY NOT NULL,
                date TEXT NOT NULL,
                numbers TEXT NOT NULL,
                stored_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_draws_stored_at ON draws(stored_at);
        "#,
        )?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> ConcursosResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| ConcursosError::store("conexão SQLite inutilizada por pânico anterior"))
    }
}

#[async_trait]
impl DrawStore for SqliteDrawStore {
    async fn find(&self, identifier: &str) -> ConcursosResult<Option<DrawRecord>> {
        let conn = self.conn()?;
        let record = conn
            .query_row(
                "SELECT identifier, date, numbers FROM draws WHERE identifier = ?",
                params![identifier.trim()],
                |row| {
                    Ok(DrawRecord {
                        identifier: row.get(0)?,
                        date: row.get(1)?,
                        numbers: decode_numbers(&row.get::<_, String>(2)?),
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    async fn insert_if_absent(&self, record: &DrawRecord) -> ConcursosResult<InsertOutcome> {
        ensure_storable(record)?;

        let conn = self.conn()?;
        let changed = conn.execute(
            "INSERT INTO draws (identifier, date, numbers, stored_at)
             VALUES (?, ?, ?, ?)
             ON CONFLICT(identifier) DO NOTHING",
            params![
                record.identifier.trim(),
                record.date,
                encode_numbers(&record.numbers),
                Utc::now().to_rfc3339()
            ],
        )?;

        Ok(if changed == 0 {
            InsertOutcome::AlreadyExists
        } else {
            InsertOutcome::Inserted
        })
    }

    async fn list(&self, limit: usize) -> ConcursosResult<Vec<StoredDraw>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT identifier, date, numbers, stored_at
             FROM draws
             ORDER BY stored_at DESC, identifier DESC
             LIMIT ?",
        )?;

        let draws = stmt
            .query_map(params![limit as i64], |row| {
                Ok(StoredDraw {
                    record: DrawRecord {
                        identifier: row.get(0)?,
                        date: row.get(1)?,
                        numbers: decode_numbers(&row.get::<_, String>(2)?),
                    },
                    stored_at: row
                        .get::<_, String>(3)?
                        .parse()
                        .unwrap_or_else(|_| Utc::now()),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(draws)
    }

    async fn count(&self) -> ConcursosResult<usize> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM draws", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(id: &str) -> DrawRecord {
        DrawRecord::new(id, "01/01/2024", ["4", "8", "15", "16", "23", "42"])
    }

    fn create_test_store() -> (SqliteDrawStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("draws.db");
        let store = SqliteDrawStore::open(&db_path).unwrap();
        (store, dir)
    }

    #[test]
    fn test_create_store() {
        let (store, _dir) = create_test_store();
        assert_eq!(tokio_test::block_on(store.count()).unwrap(), 0);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("a").join("b").join("draws.db");
        let _store = SqliteDrawStore::open(&db_path).unwrap();
        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_numbers_survive_storage() {
        let (store, _dir) = create_test_store();
        store.insert_if_absent(&sample("2500")).await.unwrap();

        let found = store.find("2500").await.unwrap().unwrap();
        assert_eq!(found.numbers, vec!["4", "8", "15", "16", "23", "42"]);
        assert_eq!(found.date, "01/01/2024");
    }

    #[tokio::test]
    async fn test_find_is_exact() {
        let (store, _dir) = create_test_store();
        store.insert_if_absent(&sample("2500")).await.unwrap();

        assert!(store.find("250").await.unwrap().is_none());
        assert!(store.find("25000").await.unwrap().is_none());
        assert!(store.find(" 2500 ").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_insert() {
        let (store, _dir) = create_test_store();
        assert_eq!(
            store.insert_if_absent(&sample("2500")).await.unwrap(),
            InsertOutcome::Inserted
        );

        let other = DrawRecord::new("2500", "31/12/2099", ["1", "2"]);
        assert_eq!(
            store.insert_if_absent(&other).await.unwrap(),
            InsertOutcome::AlreadyExists
        );

        let found = store.find("2500").await.unwrap().unwrap();
        assert_eq!(found.date, "01/01/2024");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rejects_sentinel() {
        let (store, _dir) = create_test_store();
        let err = store.insert_if_absent(&sample("latest")).await.unwrap_err();
        assert!(matches!(err, ConcursosError::Store(_)));
    }

    #[tokio::test]
    async fn test_empty_numbers_round_trip() {
        let store = SqliteDrawStore::in_memory().unwrap();
        let record = DrawRecord::new("1", "", Vec::<String>::new());
        store.insert_if_absent(&record).await.unwrap();

        let found = store.find("1").await.unwrap().unwrap();
        assert!(found.numbers.is_empty());
    }

    #[tokio::test]
    async fn test_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("draws.db");

        {
            let store = SqliteDrawStore::open(&db_path).unwrap();
            store.insert_if_absent(&sample("2500")).await.unwrap();
        }

        let store = SqliteDrawStore::open(&db_path).unwrap();
        assert!(store.find("2500").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_list() {
        let store = SqliteDrawStore::in_memory().unwrap();
        for id in ["2498", "2499", "2500"] {
            store.insert_if_absent(&sample(id)).await.unwrap();
        }

        let listed = store.list(10).await.unwrap();
        assert_eq!(listed.len(), 3);

        let limited = store.list(1).await.unwrap();
        assert_eq!(limited.len(), 1);
    }
}
