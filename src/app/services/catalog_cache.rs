//! Single-slot catalog cache keyed by source modification time
//!
//! Processing reruns the full pipeline on every cache miss, so the cache
//! holds exactly one finalized catalog behind an `Arc`: readers clone the
//! handle and can never observe a partially refreshed catalog. The slot is
//! replaced whenever the observed modification time differs from the stored
//! one and is never otherwise evicted.

use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use tracing::debug;

use crate::app::services::processor::CatalogSnapshot;

/// One-entry memoization of the finalized catalog
#[derive(Debug, Default)]
pub struct CatalogCache {
    slot: RwLock<Option<CacheEntry>>,
}

#[derive(Debug)]
struct CacheEntry {
    mtime: SystemTime,
    snapshot: Arc<CatalogSnapshot>,
}

impl CatalogCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached snapshot if the modification time still matches
    pub fn lookup(&self, mtime: SystemTime) -> Option<Arc<CatalogSnapshot>> {
        let slot = self.slot.read().expect("catalog cache lock poisoned");
        match slot.as_ref() {
            Some(entry) if entry.mtime == mtime => {
                debug!("Catalog cache hit");
                Some(Arc::clone(&entry.snapshot))
            }
            _ => None,
        }
    }

    /// Replace the slot with a freshly processed snapshot
    pub fn store(&self, mtime: SystemTime, snapshot: Arc<CatalogSnapshot>) {
        let mut slot = self.slot.write().expect("catalog cache lock poisoned");
        *slot = Some(CacheEntry { mtime, snapshot });
    }
}
