//! Cliente da API remota de resultados.
//!
//! Uma chamada, uma requisição: sem retentativas, sem cache e sem
//! timeout além do padrão do transporte. A resiliência não é
//! responsabilidade deste módulo.

mod http;
mod payload;

use async_trait::async_trait;

use crate::types::{DrawRecord, DrawRequest, FetchError};

pub use http::HttpRemoteClient;

/// Fonte remota de resultados de concursos.
#[async_trait]
pub trait RemoteClient: Send + Sync {
    /// Nome da fonte, para logs e diagnóstico.
    fn name(&self) -> &str;

    /// Busca um concurso (ou o mais recente).
    ///
    /// Em caso de sucesso o registro sempre traz o número concreto do
    /// concurso, mesmo quando a requisição foi [`DrawRequest::Latest`].
    async fn fetch(&self, request: &DrawRequest) -> Result<DrawRecord, FetchError>;
}
