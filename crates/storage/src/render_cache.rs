//! Single-slot in-memory cache for the most recently rendered map.
//!
//! The display handler stores every successfully generated map here and the
//! download handler serves it back as a file. The slot starts empty and is
//! only ever overwritten, never cleared:
//!
//! ```text
//! Absent --store--> Present --store--> Present
//! ```
//!
//! ## Consistency
//!
//! The slot holds an `Arc<RenderedMap>` snapshot behind a `RwLock`. A store
//! swaps in a fully built snapshot and a load clones the `Arc`, so readers
//! always see every field of one stored map, never a mix of two.
//!
//! ## Metrics
//!
//! - `stores`: maps written
//! - `hits`/`misses`: loads that found a map / found the slot empty

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use map_common::RenderedMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Cache holding the last rendered map.
///
/// Create one per server at start-up and share it through the application
/// state; cloning the state `Arc` is the only way handlers reach it.
#[derive(Default)]
pub struct RenderCache {
    slot: RwLock<Option<Arc<RenderedMap>>>,
    stats: RenderCacheStats,
}

/// Statistics for the render cache.
///
/// All fields are atomic for lock-free reads from status endpoints.
#[derive(Debug, Default)]
pub struct RenderCacheStats {
    /// Total maps stored
    pub stores: AtomicU64,
    /// Loads that returned a map
    pub hits: AtomicU64,
    /// Loads that found the slot empty
    pub misses: AtomicU64,
}

impl RenderCacheStats {
    pub fn stores(&self) -> u64 {
        self.stores.load(Ordering::Relaxed)
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

impl RenderCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the slot contents with `map`. Always succeeds.
    pub async fn store(&self, map: RenderedMap) {
        let snapshot = Arc::new(map);
        let mut slot = self.slot.write().await;

        debug!(
            taxon = %snapshot.taxon_name,
            style = %snapshot.map_style,
            svg_bytes = snapshot.svg_body.len(),
            replaced = slot.is_some(),
            "Storing rendered map"
        );

        *slot = Some(snapshot);
        self.stats.stores.fetch_add(1, Ordering::Relaxed);
    }

    /// Current map, or `None` if no map has been stored since start-up.
    pub async fn load(&self) -> Option<Arc<RenderedMap>> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(map) => {
                self.stats.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(map))
            }
            None => {
                self.stats.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Whether a map has been stored. Does not count as a load.
    pub async fn is_present(&self) -> bool {
        self.slot.read().await.is_some()
    }

    /// Current map without touching the hit/miss counters.
    pub async fn peek(&self) -> Option<Arc<RenderedMap>> {
        self.slot.read().await.clone()
    }

    pub fn stats(&self) -> &RenderCacheStats {
        &self.stats
    }
}
