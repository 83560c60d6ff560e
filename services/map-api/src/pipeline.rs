//! Map generation: classify, build records, dispatch, store.

use map_common::{CoordinateFormat, MapError, MapResult, MapStyle, RenderedMap};
use renderer::RecordList;
use serde::Deserialize;
use tracing::{info, warn};

use crate::classify::first_line;
use crate::dispatch;
use crate::state::AppState;

/// Fields submitted by the data entry form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapRequest {
    /// Taxon name, used as the map title and file name.
    #[serde(default)]
    pub taxon: String,
    /// Requested map style: `grid`, `plain` or `web`.
    #[serde(default)]
    pub maptype: String,
    /// One record per line.
    #[serde(default)]
    pub coordinates: String,
}

/// Result of a successful generation.
#[derive(Debug, Clone)]
pub struct GeneratedMap {
    pub taxon_name: String,
    pub format: CoordinateFormat,
    /// `None` if the requested style was not recognized.
    pub style: Option<MapStyle>,
    /// Empty when no strategy applied.
    pub svg_body: String,
    pub record_count: usize,
    pub skipped: usize,
    /// Whether the map was written to the render cache.
    pub stored: bool,
}

/// Remove all whitespace inside each line and drop blank lines.
pub fn normalize_coordinates(raw: &str) -> String {
    raw.lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a record list with the constructor matching `format`.
///
/// An `Invalid` format is rejected; callers are expected to stop before
/// reaching this point.
pub fn build_records(
    format: CoordinateFormat,
    coordinates: &str,
    taxon_name: &str,
) -> MapResult<RecordList> {
    match format {
        CoordinateFormat::Voucher => Ok(RecordList::new_vouchered(coordinates, taxon_name)),
        CoordinateFormat::NoVoucher => Ok(RecordList::new(coordinates, taxon_name)),
        CoordinateFormat::Invalid => Err(MapError::InvalidFormat {
            line: first_line(coordinates).to_string(),
        }),
    }
}

/// Generate the map for a form submission and store it in the render cache.
///
/// A rejected coordinate list leaves the cache untouched. A request for an
/// unknown style succeeds with an empty map and also leaves the cache alone.
pub async fn generate_map(state: &AppState, request: &MapRequest) -> MapResult<GeneratedMap> {
    let coordinates = normalize_coordinates(&request.coordinates);
    let classification = state.classifier.classify(&coordinates);

    if classification.format == CoordinateFormat::Invalid {
        warn!(
            line = %classification.line,
            taxon = %request.taxon,
            "Coordinates contain an error and cannot be interpreted"
        );
        state.metrics.record_invalid_coordinates();
        return Err(MapError::InvalidFormat {
            line: classification.line,
        });
    }

    let format = classification.format;
    let records = build_records(format, &coordinates, &request.taxon)?;

    let style = match request.maptype.parse::<MapStyle>() {
        Ok(style) => Some(style),
        Err(e) => {
            warn!(error = %e, taxon = %request.taxon, "No map drawn");
            None
        }
    };

    let svg_body = dispatch::render(state.renderer.as_ref(), &records, format, style);

    let stored = match style {
        Some(style) if !svg_body.is_empty() => {
            info!(
                taxon = %request.taxon,
                style = %style,
                format = %format,
                records = records.len(),
                skipped = records.skipped,
                svg_bytes = svg_body.len(),
                "Map rendered"
            );
            state
                .cache
                .store(RenderedMap::new(request.taxon.clone(), style, svg_body.clone()))
                .await;
            state.metrics.record_map_rendered(style, format);
            true
        }
        _ => false,
    };

    Ok(GeneratedMap {
        taxon_name: request.taxon.clone(),
        format,
        style,
        svg_body,
        record_count: records.len(),
        skipped: records.skipped,
        stored,
    })
}
