//! Contadores do resolver.

use std::sync::atomic::{AtomicU64, Ordering};

/// Estatísticas do resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverStats {
    /// Concursos servidos direto do armazenamento local.
    pub hits: u64,

    /// Concursos específicos ausentes no armazenamento local.
    pub misses: u64,

    /// Chamadas feitas à API remota (inclui `latest`).
    pub remote_fetches: u64,

    /// Registros gravados no armazenamento local.
    pub inserts: u64,
}

impl ResolverStats {
    /// Calcula a taxa de acerto sobre pedidos de concursos específicos.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct Counters {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub remote_fetches: AtomicU64,
    pub inserts: AtomicU64,
}

impl Counters {
    pub fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ResolverStats {
        ResolverStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            remote_fetches: self.remote_fetches.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
        }
    }
}
