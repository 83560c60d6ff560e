//! Exact-coordinate maps.

use crate::engine::MapConfig;
use crate::records::RecordList;
use crate::svg::SvgDocument;

/// One filled marker per record inside the extent. Voucher flags are ignored.
pub fn render_exact(records: &RecordList, config: &MapConfig) -> String {
    let width = config.width_px;
    let height = config.height_for(width);
    let mut doc = SvgDocument::standalone(width, height, &records.taxon_name);
    doc.graticule(&config.extent);
    draw_points(&mut doc, records, config, config.marker_radius);
    doc.caption(&records.taxon_name);
    doc.finish()
}

pub(crate) fn draw_points(
    doc: &mut SvgDocument,
    records: &RecordList,
    config: &MapConfig,
    radius: f64,
) {
    let (width, height) = (doc.width(), doc.height());
    doc.begin_group("records");
    for record in &records.records {
        if !config.extent.contains_point(record.longitude, record.latitude) {
            continue;
        }
        let (x, y) = config
            .extent
            .to_pixel(record.longitude, record.latitude, width, height);
        doc.filled_circle(x, y, radius);
    }
    doc.end_group();
}
