//! Application metrics collection.

use metrics::counter;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use map_common::{CoordinateFormat, MapStyle};

/// Metrics collector for the map service.
///
/// Counters are mirrored to the global `metrics` recorder for Prometheus and
/// kept locally for the JSON status endpoint.
#[derive(Debug)]
pub struct MetricsCollector {
    pub maps_rendered: AtomicU64,
    pub invalid_inputs: AtomicU64,
    pub downloads_served: AtomicU64,
    pub downloads_missing: AtomicU64,

    /// Start time for uptime calculation
    start_time: Instant,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self {
            maps_rendered: AtomicU64::new(0),
            invalid_inputs: AtomicU64::new(0),
            downloads_served: AtomicU64::new(0),
            downloads_missing: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a map that was rendered and stored.
    pub fn record_map_rendered(&self, style: MapStyle, format: CoordinateFormat) {
        self.maps_rendered.fetch_add(1, Ordering::Relaxed);
        counter!("maps_rendered_total", "style" => style.as_str(), "format" => format.as_str())
            .increment(1);
    }

    /// Record a coordinate list rejected by the classifier.
    pub fn record_invalid_coordinates(&self) {
        self.invalid_inputs.fetch_add(1, Ordering::Relaxed);
        counter!("invalid_coordinates_total").increment(1);
    }

    /// Record a download request; `served` is false when no map was cached.
    pub fn record_download(&self, served: bool) {
        if served {
            self.downloads_served.fetch_add(1, Ordering::Relaxed);
            counter!("map_downloads_total", "result" => "served").increment(1);
        } else {
            self.downloads_missing.fetch_add(1, Ordering::Relaxed);
            counter!("map_downloads_total", "result" => "missing").increment(1);
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
