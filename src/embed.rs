//! Ponto de entrada para quem embute o resultado em uma página.

use crate::presenter::{present, present_error};
use crate::resolver::Resolver;
use crate::types::LATEST;

/// Concurso usado quando o chamador não informa nenhum.
pub const DEFAULT_CONCURSO: &str = LATEST;

/// Resolve e formata um concurso.
///
/// Nunca falha: erros viram uma mensagem de texto no lugar do resultado,
/// para que o restante da página continue sendo renderizado.
pub async fn render(resolver: &Resolver, concurso: Option<&str>) -> String {
    let requested = concurso.unwrap_or(DEFAULT_CONCURSO);

    match resolver.resolve(requested).await {
        Ok(record) => present(&record),
        Err(e) => present_error(&e),
    }
}
