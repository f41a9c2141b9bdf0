//! Formato JSON da API de resultados.

use std::fmt;

use serde::Deserialize;

use crate::types::{DrawRecord, FetchError};

/// Valor que a API pode enviar como texto ou como número.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Token {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Text(s) => f.write_str(s.trim()),
            Token::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Corpo da resposta. Campos extras da API são ignorados.
#[derive(Debug, Deserialize)]
pub(super) struct ApiDraw {
    concurso: Option<Token>,
    data: Option<String>,
    dezenas: Option<Vec<Token>>,
}

impl ApiDraw {
    /// Decodifica o corpo da resposta.
    pub(super) fn parse(body: &[u8]) -> Result<DrawRecord, FetchError> {
        let draw: ApiDraw =
            serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;
        draw.into_record()
    }

    /// Converte para o registro de domínio.
    ///
    /// Data e dezenas ausentes viram valores vazios; quem decide se o
    /// registro pode ser exibido é o apresentador. Sem número de concurso
    /// não há como reconciliar com o cache, então a resposta é rejeitada.
    fn into_record(self) -> Result<DrawRecord, FetchError> {
        let identifier = self
            .concurso
            .map(|c| c.to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| FetchError::Decode("campo 'concurso' ausente ou vazio".to_string()))?;

        Ok(DrawRecord {
            identifier,
            date: self.data.map(|d| d.trim().to_string()).unwrap_or_default(),
            numbers: self
                .dezenas
                .unwrap_or_default()
                .iter()
                .map(Token::to_string)
                .filter(|n| !n.is_empty())
                .collect(),
        })
    }
}
