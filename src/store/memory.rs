//! Armazenamento em memória.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ensure_storable, DrawStore, InsertOutcome};
use crate::types::{ConcursosResult, DrawRecord, StoredDraw};

/// Armazenamento em memória, perdido ao encerrar o processo.
#[derive(Default)]
pub struct MemoryDrawStore {
    draws: RwLock<HashMap<String, StoredDraw>>,
}

impl MemoryDrawStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DrawStore for MemoryDrawStore {
    async fn find(&self, identifier: &str) -> ConcursosResult<Option<DrawRecord>> {
        let draws = self.draws.read().await;
        Ok(draws.get(identifier.trim()).map(|d| d.record.clone()))
    }

    async fn insert_if_absent(&self, record: &DrawRecord) -> ConcursosResult<InsertOutcome> {
        ensure_storable(record)?;

        let mut draws = self.draws.write().await;
        match draws.entry(record.identifier.trim().to_string()) {
            Entry::Occupied(_) => Ok(InsertOutcome::AlreadyExists),
            Entry::Vacant(slot) => {
                slot.insert(StoredDraw {
                    record: record.clone(),
                    stored_at: Utc::now(),
                });
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    async fn list(&self, limit: usize) -> ConcursosResult<Vec<StoredDraw>> {
        let draws = self.draws.read().await;
        let mut all: Vec<StoredDraw> = draws.values().cloned().collect();
        all.sort_by(|a, b| {
            b.stored_at
                .cmp(&a.stored_at)
                .then_with(|| b.record.identifier.cmp(&a.record.identifier))
        });
        all.truncate(limit);
        Ok(all)
    }

    async fn count(&self) -> ConcursosResult<usize> {
        Ok(self.draws.read().await.len())
    }
}
