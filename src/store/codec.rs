//! Codificação das dezenas na coluna de texto do armazenamento.

const SEPARATOR: &str = ", ";

/// Junta as dezenas em uma única string.
pub fn encode_numbers(numbers: &[String]) -> String {
    numbers.join(SEPARATOR)
}

/// Separa a string armazenada de volta em dezenas.
///
/// Fragmentos vazios são descartados, então `""` vira uma lista vazia.
pub fn decode_numbers(encoded: &str) -> Vec<String> {
    encoded
        .split(',')
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}
