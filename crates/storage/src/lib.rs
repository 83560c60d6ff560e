//! Storage for rendered maps.
//!
//! The service keeps exactly one map in memory: the last one generated.

pub mod render_cache;

pub use render_cache::{RenderCache, RenderCacheStats};
