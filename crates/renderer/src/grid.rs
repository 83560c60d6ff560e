//! Grid distribution maps.
//!
//! Records are binned into cells aligned to a global grid of
//! `cell_size_deg` degrees, so a cell covers the same ground regardless of
//! which records happen to fall in it. Each occupied cell is drawn once.

use std::collections::BTreeMap;

use map_common::BoundingBox;
use tracing::debug;

use crate::engine::MapConfig;
use crate::records::RecordList;
use crate::svg::SvgDocument;

/// Index of a grid cell: `(floor(lon / size), floor(lat / size))`.
pub type CellIndex = (i64, i64);

/// What is known about the records inside one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellSummary {
    pub records: usize,
    pub vouchered: usize,
}

impl CellSummary {
    pub fn has_voucher(&self) -> bool {
        self.vouchered > 0
    }
}

/// Bin the records that fall inside `extent` into grid cells.
pub fn occupied_cells(
    records: &RecordList,
    extent: &BoundingBox,
    cell_size_deg: f64,
) -> BTreeMap<CellIndex, CellSummary> {
    let mut cells: BTreeMap<CellIndex, CellSummary> = BTreeMap::new();
    let mut outside = 0usize;

    for record in &records.records {
        if !extent.contains_point(record.longitude, record.latitude) {
            outside += 1;
            continue;
        }
        let index = (
            (record.longitude / cell_size_deg).floor() as i64,
            (record.latitude / cell_size_deg).floor() as i64,
        );
        let cell = cells.entry(index).or_default();
        cell.records += 1;
        if record.is_vouchered() {
            cell.vouchered += 1;
        }
    }

    if outside > 0 {
        debug!(outside, taxon = %records.taxon_name, "Records outside map extent");
    }

    cells
}

/// Pixel rectangle `(x, y, width, height)` covered by a cell.
fn cell_rect(
    index: CellIndex,
    config: &MapConfig,
    width: f64,
    height: f64,
) -> (f64, f64, f64, f64) {
    let size = config.cell_size_deg;
    let west = index.0 as f64 * size;
    let north = (index.1 + 1) as f64 * size;
    let (x0, y0) = config.extent.to_pixel(west, north, width, height);
    let (x1, y1) = config.extent.to_pixel(west + size, north - size, width, height);
    (x0, y0, x1 - x0, y1 - y0)
}

/// Filled square per occupied cell.
pub fn render_grid(records: &RecordList, config: &MapConfig) -> String {
    let width = config.width_px;
    let height = config.height_for(width);
    let mut doc = SvgDocument::standalone(width, height, &records.taxon_name);
    doc.graticule(&config.extent);

    doc.begin_group("cells");
    for index in occupied_cells(records, &config.extent, config.cell_size_deg).keys() {
        let (x, y, w, h) = cell_rect(*index, config, width, height);
        doc.filled_rect(x, y, w, h);
    }
    doc.end_group();

    doc.caption(&records.taxon_name);
    doc.finish()
}

/// Circle per occupied cell, filled if any record in the cell is vouchered
/// and hollow if all of them are anecdotal.
pub fn render_voucher_grid(records: &RecordList, config: &MapConfig) -> String {
    let width = config.width_px;
    let height = config.height_for(width);
    let mut doc = SvgDocument::standalone(width, height, &records.taxon_name);
    doc.graticule(&config.extent);

    let cells = occupied_cells(records, &config.extent, config.cell_size_deg);
    let (vouchered, anecdotal): (Vec<_>, Vec<_>) =
        cells.iter().partition(|(_, summary)| summary.has_voucher());

    // Anecdotal first so vouchered markers are drawn on top.
    doc.begin_group("anecdotal");
    for (index, _) in anecdotal {
        let (x, y, w, h) = cell_rect(*index, config, width, height);
        doc.hollow_circle(x + w / 2.0, y + h / 2.0, w.min(h) * 0.4);
    }
    doc.end_group();

    doc.begin_group("vouchered");
    for (index, _) in vouchered {
        let (x, y, w, h) = cell_rect(*index, config, width, height);
        doc.filled_circle(x + w / 2.0, y + h / 2.0, w.min(h) * 0.4);
    }
    doc.end_group();

    doc.caption(&records.taxon_name);
    doc.finish()
}
