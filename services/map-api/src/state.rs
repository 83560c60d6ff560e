//! Application state shared by all request handlers.

use renderer::{MapRenderer, TasmapRenderer};
use storage::RenderCache;

use crate::classify::{CoordinateClassifier, EveryLineClassifier, FirstLineClassifier};
use crate::metrics::MetricsCollector;

/// Shared application state.
///
/// Built once at start-up and handed to every handler behind an `Arc`.
pub struct AppState {
    /// The last successfully rendered map.
    pub cache: RenderCache,

    /// Rendering engine used by the dispatcher.
    pub renderer: Box<dyn MapRenderer>,

    /// Coordinate format detection strategy.
    pub classifier: Box<dyn CoordinateClassifier>,

    pub metrics: MetricsCollector,
}

impl AppState {
    /// Default engine; first-line classification unless `strict_coordinates`
    /// asks for every line to be checked.
    pub fn new(strict_coordinates: bool) -> Self {
        let classifier: Box<dyn CoordinateClassifier> = if strict_coordinates {
            Box::new(EveryLineClassifier)
        } else {
            Box::new(FirstLineClassifier)
        };
        Self::with_parts(Box::new(TasmapRenderer::default()), classifier)
    }

    pub fn with_parts(
        renderer: Box<dyn MapRenderer>,
        classifier: Box<dyn CoordinateClassifier>,
    ) -> Self {
        Self {
            cache: RenderCache::new(),
            renderer,
            classifier,
            metrics: MetricsCollector::new(),
        }
    }
}
