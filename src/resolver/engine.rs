//! Resolução de concursos: cache local com fallback para a API.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::stats::{Counters, ResolverStats};
use crate::remote::{HttpRemoteClient, RemoteClient};
use crate::store::{open_store, DrawStore, InsertOutcome};
use crate::types::config::Config;
use crate::types::{ConcursosResult, DrawRecord, DrawRequest, ResolveError};

/// Resolve concursos a partir do armazenamento local ou da API remota.
///
/// - Concurso específico: consulta o armazenamento; se encontrado, a API
///   não é chamada.
/// - `latest`: sempre consulta a API, pois não é uma chave estável.
///
/// Todo resultado obtido da API é gravado no armazenamento se ainda não
/// existir lá. A gravação é best-effort: falhas do armazenamento são
/// registradas em log e nunca impedem a resposta.
pub struct Resolver {
    store: Arc<dyn DrawStore>,
    remote: Arc<dyn RemoteClient>,
    counters: Counters,
}

impl Resolver {
    /// Cria um resolver com os colaboradores informados.
    pub fn new(store: Arc<dyn DrawStore>, remote: Arc<dyn RemoteClient>) -> Self {
        Self {
            store,
            remote,
            counters: Counters::default(),
        }
    }

    /// Monta o resolver com o armazenamento e a API da configuração.
    pub fn from_config(config: &Config) -> ConcursosResult<Self> {
        let store = open_store(&config.store)?;
        let remote = Arc::new(HttpRemoteClient::from_config(&config.api)?);
        Ok(Self::new(store, remote))
    }

    /// Resolve o concurso pedido como texto (`"2500"`, `"latest"`, ...).
    pub async fn resolve(&self, requested: &str) -> Result<DrawRecord, ResolveError> {
        self.resolve_request(&DrawRequest::parse(requested)).await
    }

    /// Resolve um concurso já interpretado.
    pub async fn resolve_request(&self, request: &DrawRequest) -> Result<DrawRecord, ResolveError> {
        if let DrawRequest::Number(identifier) = request {
            if let Some(record) = self.lookup(identifier).await {
                Counters::bump(&self.counters.hits);
                debug!(concurso = %identifier, "Concurso encontrado no armazenamento local");
                return Ok(record);
            }
            Counters::bump(&self.counters.misses);
            debug!(concurso = %identifier, "Concurso ausente no armazenamento local");
        }

        self.fetch_and_store(request).await
    }

    /// Retorna as estatísticas acumuladas.
    pub fn stats(&self) -> ResolverStats {
        self.counters.snapshot()
    }

    async fn fetch_and_store(&self, request: &DrawRequest) -> Result<DrawRecord, ResolveError> {
        Counters::bump(&self.counters.remote_fetches);

        let record = self.remote.fetch(request).await.map_err(|e| {
            warn!(
                requested = %request,
                remote = self.remote.name(),
                error = %e.detail(),
                "Consulta remota falhou"
            );
            ResolveError::Upstream(e)
        })?;

        // `latest` pode ter trazido um concurso que já está salvo com o número real
        let concrete = record.identifier.trim();
        if self.lookup(concrete).await.is_none() {
            self.write_back(&record).await;
        }

        Ok(record)
    }

    /// Busca no armazenamento; falhas contam como ausência.
    async fn lookup(&self, identifier: &str) -> Option<DrawRecord> {
        match self.store.find(identifier).await {
            Ok(found) => found,
            Err(e) => {
                warn!(concurso = %identifier, error = %e, "Falha ao consultar armazenamento local");
                None
            }
        }
    }

    async fn write_back(&self, record: &DrawRecord) {
        match self.store.insert_if_absent(record).await {
            Ok(InsertOutcome::Inserted) => {
                Counters::bump(&self.counters.inserts);
                info!(concurso = %record.identifier, "Concurso salvo no armazenamento local");
            }
            Ok(InsertOutcome::AlreadyExists) => {
                debug!(concurso = %record.identifier, "Concurso já gravado por outra requisição");
            }
            Err(e) => {
                warn!(concurso = %record.identifier, error = %e, "Falha ao salvar concurso");
            }
        }
    }
}
