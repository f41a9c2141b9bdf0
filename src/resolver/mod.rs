//! Resolver de concursos.
//!
//! Decide entre o armazenamento local e a API remota, e grava no
//! armazenamento os concursos obtidos remotamente.

mod engine;
mod stats;

pub use engine::Resolver;
pub use stats::ResolverStats;
