//! Tipos compartilhados do Concursos.

pub mod config;
pub mod draw;
pub mod errors;

pub use draw::{DrawRecord, DrawRequest, StoredDraw, LATEST};
pub use errors::{ConcursosError, ConcursosResult, FetchError, ResolveError};
