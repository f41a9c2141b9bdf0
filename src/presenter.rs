//! Apresentação de concursos em texto.
//!
//! Consome apenas registros já resolvidos; não faz IO.

use crate::types::{DrawRecord, ResolveError};

/// Mensagem exibida quando o registro não tem todos os campos.
pub const INCOMPLETE_MESSAGE: &str = "Dados incompletos para exibição.";

/// Prefixo das mensagens de erro exibidas no lugar do resultado.
pub const ERROR_PREFIX: &str = "Erro ao buscar o resultado: ";

/// Formata um concurso.
///
/// Registros sem número, data ou dezenas produzem [`INCOMPLETE_MESSAGE`]
/// em vez de uma saída parcial.
pub fn present(record: &DrawRecord) -> String {
    if !record.is_complete() {
        return INCOMPLETE_MESSAGE.to_string();
    }

    format!(
        "Concurso: {}\nData: {}\nDezenas sorteadas: {}",
        record.identifier.trim(),
        record.date.trim(),
        record.numbers.join(", ")
    )
}

/// Formata a falha de resolução como mensagem para o usuário.
pub fn present_error(error: &ResolveError) -> String {
    format!("{}{}", ERROR_PREFIX, error)
}
