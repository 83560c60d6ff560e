//! Rendering engine entry points.

use map_common::BoundingBox;

use crate::records::RecordList;
use crate::{exact, grid, web};

/// Geometry shared by every map type.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Geographic extent drawn on every map.
    pub extent: BoundingBox,
    /// Pixel width of standalone maps (grid, voucher, exact).
    pub width_px: f64,
    /// Pixel width of the web map's view box.
    pub web_width_px: f64,
    /// Grid cell size in degrees.
    pub cell_size_deg: f64,
    /// Marker radius in pixels for exact-coordinate maps.
    pub marker_radius: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            extent: BoundingBox::tasmania(),
            width_px: 500.0,
            web_width_px: 320.0,
            cell_size_deg: 0.1,
            marker_radius: 3.0,
        }
    }
}

impl MapConfig {
    /// Canvas height for a given width, keeping ground distances roughly
    /// square at the extent's mid latitude.
    pub fn height_for(&self, width_px: f64) -> f64 {
        let mid_lat = (self.extent.min_y + self.extent.max_y) / 2.0;
        let lon_scale = mid_lat.to_radians().cos();
        (width_px * self.extent.height() / (self.extent.width() * lon_scale)).round()
    }
}

/// The four map drawing entry points.
///
/// Implementations must be pure with respect to the record list: the same
/// input always produces the same SVG text.
pub trait MapRenderer: Send + Sync {
    /// Grid map with filled markers for vouchered cells and hollow markers
    /// for cells holding only anecdotal records.
    fn voucher_map(&self, records: &RecordList) -> String;

    /// Grid map with one filled cell per occupied grid square.
    fn grid_map(&self, records: &RecordList) -> String;

    /// One marker per record at its exact coordinates.
    fn exact_map(&self, records: &RecordList) -> String;

    /// Compact, scalable exact-coordinate map for inline web display.
    fn web_map(&self, records: &RecordList) -> String;
}

/// Renderer for Tasmanian distribution maps.
#[derive(Debug, Clone, Default)]
pub struct TasmapRenderer {
    config: MapConfig,
}

impl TasmapRenderer {
    pub fn new(config: MapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }
}

impl MapRenderer for TasmapRenderer {
    fn voucher_map(&self, records: &RecordList) -> String {
        grid::render_voucher_grid(records, &self.config)
    }

    fn grid_map(&self, records: &RecordList) -> String {
        grid::render_grid(records, &self.config)
    }

    fn exact_map(&self, records: &RecordList) -> String {
        exact::render_exact(records, &self.config)
    }

    fn web_map(&self, records: &RecordList) -> String {
        web::render_web(records, &self.config)
    }
}
