//! # Concursos
//!
//! Resultados de concursos da Mega-Sena com cache local.
//!
//! Cada concurso pedido é buscado primeiro no armazenamento local; se não
//! estiver lá (ou se o pedido for `latest`), é consultado na API pública
//! e gravado localmente para as próximas consultas.
//!
//! ## Módulos
//!
//! - [`remote`] - Cliente da API de resultados
//! - [`store`] - Armazenamento local (SQLite ou memória)
//! - [`resolver`] - Decisão entre cache local e API
//! - [`presenter`] - Formatação em texto
//! - [`embed`] - Ponto de entrada: concurso → texto
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados

#[cfg(feature = "cli")]
pub mod cli;
pub mod embed;
pub mod presenter;
pub mod remote;
pub mod resolver;
pub mod store;
pub mod types;

pub use resolver::Resolver;
pub use types::config::Config;
pub use types::errors::{ConcursosError, ConcursosResult, FetchError, ResolveError};
pub use types::{DrawRecord, DrawRequest};
