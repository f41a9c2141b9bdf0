//! Cliente HTTP da API de resultados.

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::payload::ApiDraw;
use super::RemoteClient;
use crate::types::config::ApiConfig;
use crate::types::{ConcursosError, ConcursosResult, DrawRecord, DrawRequest, FetchError};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Cliente da API pública de resultados da Mega-Sena.
///
/// Faz `GET {base_url}/{concurso}` ou `GET {base_url}/latest`.
#[derive(Clone)]
pub struct HttpRemoteClient {
    client: Client,
    base_url: Url,
}

impl HttpRemoteClient {
    /// Cria um cliente para o endpoint informado.
    pub fn new(base_url: &str) -> ConcursosResult<Self> {
        let base_url = Url::parse(base_url.trim().trim_end_matches('/')).map_err(|e| {
            ConcursosError::config(format!("URL base inválida '{}': {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ConcursosError::config(format!(
                "URL base não aceita caminhos: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ConcursosError::Http(format!("Falha ao criar cliente HTTP: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// Cria um cliente a partir da configuração.
    pub fn from_config(config: &ApiConfig) -> ConcursosResult<Self> {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Monta a URL do concurso.
    ///
    /// O identificador vira um único segmento de caminho, com
    /// percent-encoding, então qualquer texto é aceito.
    pub fn url_for(&self, request: &DrawRequest) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Transport(format!("URL base inválida: {}", self.base_url)))?
            .pop_if_empty()
            .push(request.path_segment());
        Ok(url)
    }
}

#[async_trait]
impl RemoteClient for HttpRemoteClient {
    fn name(&self) -> &str {
        "loteriascaixa-api"
    }

    async fn fetch(&self, request: &DrawRequest) -> Result<DrawRecord, FetchError> {
        let url = self.url_for(request)?;
        debug!(%url, "Consultando API de resultados");

        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            warn!(%url, error = %e, "Falha de transporte");
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "API respondeu com erro");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(%url, error = %e, "Falha ao ler corpo da resposta");
            FetchError::Transport(e.to_string())
        })?;

        ApiDraw::parse(&body).inspect_err(|e| {
            warn!(%url, error = %e.detail(), "Resposta não pôde ser decodificada");
        })
    }
}
