//! Armazenamento local de concursos.
//!
//! O armazenamento funciona como cache da API remota: cada concurso
//! é gravado uma única vez, na primeira consulta bem-sucedida, e nunca
//! é alterado ou removido depois disso.
//!
//! ## Backends
//!
//! - [`SqliteDrawStore`]: persistência em SQLite (feature `sqlite`)
//! - [`MemoryDrawStore`]: mapa em memória, para testes ou cache desabilitado

pub mod codec;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::types::config::StoreConfig;
use crate::types::{ConcursosError, ConcursosResult, DrawRecord, StoredDraw, LATEST};

pub use memory::MemoryDrawStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDrawStore;

/// Resultado de uma inserção condicional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// O registro foi gravado.
    Inserted,
    /// Já existia um registro para o mesmo concurso; nada foi alterado.
    AlreadyExists,
}

/// Armazenamento de concursos indexado pelo número do concurso.
#[async_trait]
pub trait DrawStore: Send + Sync {
    /// Busca exata por número de concurso. Não tem efeitos colaterais.
    async fn find(&self, identifier: &str) -> ConcursosResult<Option<DrawRecord>>;

    /// Grava o registro se ainda não existir um com o mesmo número.
    ///
    /// Atômico por número de concurso: inserções concorrentes do mesmo
    /// concurso resultam em exatamente um registro, e as perdedoras
    /// recebem [`InsertOutcome::AlreadyExists`].
    async fn insert_if_absent(&self, record: &DrawRecord) -> ConcursosResult<InsertOutcome>;

    /// Lista os registros mais recentes primeiro.
    async fn list(&self, limit: usize) -> ConcursosResult<Vec<StoredDraw>>;

    /// Número de concursos armazenados.
    async fn count(&self) -> ConcursosResult<usize>;
}

/// Abre o armazenamento descrito na configuração.
pub fn open_store(config: &StoreConfig) -> ConcursosResult<Arc<dyn DrawStore>> {
    if !config.enabled {
        tracing::debug!("Persistência desabilitada, usando armazenamento em memória");
        return Ok(Arc::new(MemoryDrawStore::new()));
    }
    open_persistent(&config.db_path)
}

#[cfg(feature = "sqlite")]
fn open_persistent(db_path: &Path) -> ConcursosResult<Arc<dyn DrawStore>> {
    tracing::debug!("Abrindo banco de concursos em {}", db_path.display());
    Ok(Arc::new(SqliteDrawStore::open(db_path)?))
}

#[cfg(not(feature = "sqlite"))]
fn open_persistent(db_path: &Path) -> ConcursosResult<Arc<dyn DrawStore>> {
    Err(ConcursosError::config(format!(
        "persistência em {} requer a feature `sqlite`",
        db_path.display()
    )))
}

/// Rejeita registros que não podem ser persistidos.
pub(crate) fn ensure_storable(record: &DrawRecord) -> ConcursosResult<()> {
    let identifier = record.identifier.trim();
    if identifier.is_empty() {
        return Err(ConcursosError::store("concurso sem número"));
    }
    if identifier == LATEST {
        return Err(ConcursosError::store(format!(
            "'{}' não é um número de concurso",
            LATEST
        )));
    }
    Ok(())
}
