//! The most recently rendered map, as held by the render cache.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::format::MapStyle;

/// A generated SVG map together with the data needed to serve it as a file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedMap {
    pub taxon_name: String,
    pub map_style: MapStyle,
    #[serde(skip_serializing)]
    pub svg_body: String,
    pub generated_at: DateTime<Utc>,
}

impl RenderedMap {
    pub fn new(taxon_name: impl Into<String>, map_style: MapStyle, svg_body: String) -> Self {
        Self {
            taxon_name: taxon_name.into(),
            map_style,
            svg_body,
            generated_at: Utc::now(),
        }
    }

    /// Suggested download name, e.g. `eucalyptus-gunnii.grid.svg`.
    pub fn file_name(&self) -> String {
        file_name_for(&self.taxon_name, self.map_style)
    }
}

/// Lowercase the taxon name, replace spaces with hyphens and append the
/// style and `.svg` extension.
///
/// Control characters are also replaced with hyphens so the name is always
/// usable in a `Content-Disposition` header.
pub fn file_name_for(taxon_name: &str, style: MapStyle) -> String {
    let stem: String = taxon_name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c.is_control() { '-' } else { c })
        .collect();
    format!("{}.{}.svg", stem, style.as_str())
}
