//! Modelo de dados de um concurso.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token de requisição que significa "concurso mais recente".
pub const LATEST: &str = "latest";

/// Resultado de um concurso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Número do concurso (nunca o sentinela `latest`).
    pub identifier: String,

    /// Data do sorteio, como texto.
    pub date: String,

    /// Dezenas sorteadas, na ordem informada pela API.
    pub numbers: Vec<String>,
}

impl DrawRecord {
    /// Cria um novo registro.
    pub fn new(
        identifier: impl Into<String>,
        date: impl Into<String>,
        numbers: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            date: date.into(),
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }

    /// Verifica se o registro tem todos os campos necessários para exibição.
    pub fn is_complete(&self) -> bool {
        !self.identifier.trim().is_empty()
            && !self.date.trim().is_empty()
            && !self.numbers.is_empty()
    }
}

/// Concurso solicitado pelo chamador.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DrawRequest {
    /// Concurso mais recente; nunca resolvido pelo cache.
    Latest,
    /// Concurso específico.
    Number(String),
}

impl DrawRequest {
    /// Interpreta o texto recebido do chamador.
    ///
    /// O texto é aparado; vazio equivale ao valor padrão `latest`.
    /// Nenhuma outra validação é feita.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == LATEST {
            DrawRequest::Latest
        } else {
            DrawRequest::Number(trimmed.to_string())
        }
    }

    /// Segmento de caminho usado na URL da API.
    pub fn path_segment(&self) -> &str {
        match self {
            DrawRequest::Latest => LATEST,
            DrawRequest::Number(id) => id,
        }
    }
}

impl fmt::Display for DrawRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Registro persistido, com o momento em que entrou no cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredDraw {
    #[serde(flatten)]
    pub record: DrawRecord,
    pub stored_at: DateTime<Utc>,
}
