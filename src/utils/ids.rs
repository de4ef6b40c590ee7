//! Injectable identifier sources
//!
//! Identifiers are `<prefix>-<suffix>`. Production uses random suffixes;
//! tests use a counter so expected records can be written out in full.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of fresh identifiers
pub trait IdSource: Send + Sync {
    fn next_id(&self, prefix: &str) -> String;
}

/// Random identifiers with a short uuid-derived suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&self, prefix: &str) -> String {
        let simple = Uuid::new_v4().simple().to_string();
        format!("{}-{}", prefix, &simple[..8])
    }
}

/// Counter-based identifiers: `sc-1`, `sc-2`, ...
///
/// One counter is shared by every prefix.
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, prefix: &str) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        format!("{}-{}", prefix, n)
    }
}
