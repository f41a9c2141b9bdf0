//! Tipos de erro do Concursos.

use thiserror::Error;

/// Tipo de resultado padrão do Concursos.
pub type ConcursosResult<T> = Result<T, ConcursosError>;

/// Erros de infraestrutura (configuração, banco, IO, CLI).
#[derive(Error, Debug)]
pub enum ConcursosError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "sqlite")]
    #[error("Erro no banco de dados: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Erro no armazenamento local: {0}")]
    Store(String),

    #[error("Erro no cliente HTTP: {0}")]
    Http(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl ConcursosError {
    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro de armazenamento.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        Self::Store(msg.into())
    }
}

/// Falha de uma única consulta à API remota.
///
/// As mensagens são as exibidas ao usuário final; o detalhe técnico fica
/// no campo da variante e nos logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Falha de rede ou de conexão.
    #[error("Falha ao acessar a API.")]
    Transport(String),

    /// Resposta com status diferente de 2xx.
    #[error("Erro na API: Código {0}")]
    Status(u16),

    /// Corpo da resposta não é o JSON esperado.
    #[error("Erro ao decodificar o JSON.")]
    Decode(String),
}

impl FetchError {
    /// Detalhe técnico para diagnóstico.
    pub fn detail(&self) -> String {
        match self {
            FetchError::Transport(detail) | FetchError::Decode(detail) => detail.clone(),
            FetchError::Status(code) => format!("HTTP {}", code),
        }
    }
}

/// Único erro produzido pelo resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("{0}")]
    Upstream(#[from] FetchError),
}
