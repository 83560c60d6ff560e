//! Maps for inline display on web pages.

use crate::engine::MapConfig;
use crate::exact::draw_points;
use crate::records::RecordList;
use crate::svg::SvgDocument;

/// Scalable exact-coordinate map without an XML prolog or caption.
pub fn render_web(records: &RecordList, config: &MapConfig) -> String {
    let width = config.web_width_px;
    let height = config.height_for(width);
    let mut doc = SvgDocument::scalable(width, height, &records.taxon_name);
    doc.graticule(&config.extent);

    // Scale markers with the view box.
    let radius = config.marker_radius * width / config.width_px;
    draw_points(&mut doc, records, config, radius);
    doc.finish()
}
