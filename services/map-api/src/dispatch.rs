//! Map type dispatch.
//!
//! Selection is a lookup in [`DISPATCH_TABLE`], keyed by coordinate format
//! and requested style. Only the grid style distinguishes voucher lists;
//! plain and web maps ignore voucher flags. A pair missing from the table
//! (an unrecognized style, or an invalid format) renders nothing.

use map_common::{CoordinateFormat, MapStyle};
use renderer::{MapRenderer, RecordList};
use tracing::debug;

/// The rendering engine entry point used for one table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderStrategy {
    /// Grid with filled markers for vouchered cells, hollow for anecdotal.
    VoucherGrid,
    /// Plain grid.
    Grid,
    /// Exact coordinates.
    Exact,
    /// Exact coordinates, scalable for web pages.
    Web,
}

impl RenderStrategy {
    /// Name of the engine entry point this strategy calls.
    pub fn entry_point(&self) -> &'static str {
        match self {
            RenderStrategy::VoucherGrid => "voucher_map",
            RenderStrategy::Grid => "grid_map",
            RenderStrategy::Exact => "exact_map",
            RenderStrategy::Web => "web_map",
        }
    }

    pub fn render(&self, engine: &dyn MapRenderer, records: &RecordList) -> String {
        match self {
            RenderStrategy::VoucherGrid => engine.voucher_map(records),
            RenderStrategy::Grid => engine.grid_map(records),
            RenderStrategy::Exact => engine.exact_map(records),
            RenderStrategy::Web => engine.web_map(records),
        }
    }
}

/// Every supported `(format, style)` pair.
pub const DISPATCH_TABLE: [((CoordinateFormat, MapStyle), RenderStrategy); 6] = [
    ((CoordinateFormat::Voucher, MapStyle::Grid), RenderStrategy::VoucherGrid),
    ((CoordinateFormat::NoVoucher, MapStyle::Grid), RenderStrategy::Grid),
    ((CoordinateFormat::Voucher, MapStyle::Plain), RenderStrategy::Exact),
    ((CoordinateFormat::NoVoucher, MapStyle::Plain), RenderStrategy::Exact),
    ((CoordinateFormat::Voucher, MapStyle::Web), RenderStrategy::Web),
    ((CoordinateFormat::NoVoucher, MapStyle::Web), RenderStrategy::Web),
];

/// Look up the strategy for a format and style.
pub fn select_strategy(format: CoordinateFormat, style: MapStyle) -> Option<RenderStrategy> {
    DISPATCH_TABLE
        .iter()
        .find(|(key, _)| *key == (format, style))
        .map(|(_, strategy)| *strategy)
}

/// Render `records` with the strategy for `(format, style)`.
///
/// `style` is `None` when the request named a style that does not exist.
/// Returns an empty string when no strategy applies.
pub fn render(
    engine: &dyn MapRenderer,
    records: &RecordList,
    format: CoordinateFormat,
    style: Option<MapStyle>,
) -> String {
    let Some(strategy) = style.and_then(|style| select_strategy(format, style)) else {
        debug!(format = %format, style = ?style, "No render strategy");
        return String::new();
    };

    debug!(
        format = %format,
        style = ?style,
        entry_point = strategy.entry_point(),
        records = records.len(),
        "Selected render strategy"
    );
    strategy.render(engine, records)
}
