//! Minimal SVG document writer shared by all map types.

use map_common::BoundingBox;
use quick_xml::escape::escape;

/// Marker colours and stroke widths.
pub const MARKER_COLOR: &str = "#000000";
pub const GRATICULE_COLOR: &str = "#b0b0b0";
pub const FRAME_COLOR: &str = "#404040";

/// An SVG document under construction.
///
/// Elements are appended in drawing order; `finish` closes the root element
/// and returns the markup.
pub struct SvgDocument {
    out: String,
    width: f64,
    height: f64,
}

impl SvgDocument {
    /// Start a standalone document with an XML prolog and fixed pixel size.
    pub fn standalone(width: f64, height: f64, title: &str) -> Self {
        let mut doc = Self {
            out: String::with_capacity(4096),
            width,
            height,
        };
        doc.out
            .push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n");
        doc.out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\">\n",
            w = width,
            h = height
        ));
        doc.push_title(title);
        doc
    }

    /// Start an inline document that scales to its container.
    pub fn scalable(width: f64, height: f64, title: &str) -> Self {
        let mut doc = Self {
            out: String::with_capacity(4096),
            width,
            height,
        };
        doc.out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" viewBox=\"0 0 {:.0} {:.0}\" preserveAspectRatio=\"xMidYMid meet\">\n",
            width, height
        ));
        doc.push_title(title);
        doc
    }

    fn push_title(&mut self, title: &str) {
        self.out
            .push_str(&format!("<title>{}</title>\n", escape(title)));
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Draw the map frame and whole-degree graticule lines for `bbox`.
    pub fn graticule(&mut self, bbox: &BoundingBox) {
        self.out.push_str(&format!(
            "<g class=\"graticule\" stroke=\"{}\" stroke-width=\"0.5\" fill=\"none\">\n",
            GRATICULE_COLOR
        ));

        let mut lon = bbox.min_x.ceil();
        while lon <= bbox.max_x {
            let (x, _) = bbox.to_pixel(lon, bbox.max_y, self.width, self.height);
            self.out.push_str(&format!(
                "<line x1=\"{x:.2}\" y1=\"0\" x2=\"{x:.2}\" y2=\"{:.2}\"/>\n",
                self.height
            ));
            lon += 1.0;
        }

        let mut lat = bbox.min_y.ceil();
        while lat <= bbox.max_y {
            let (_, y) = bbox.to_pixel(bbox.min_x, lat, self.width, self.height);
            self.out.push_str(&format!(
                "<line x1=\"0\" y1=\"{y:.2}\" x2=\"{:.2}\" y2=\"{y:.2}\"/>\n",
                self.width
            ));
            lat += 1.0;
        }

        self.out.push_str("</g>\n");
        self.out.push_str(&format!(
            "<rect class=\"frame\" x=\"0\" y=\"0\" width=\"{:.0}\" height=\"{:.0}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            self.width, self.height, FRAME_COLOR
        ));
    }

    /// Open a group of markers. Must be paired with `end_group`.
    pub fn begin_group(&mut self, class: &str) {
        self.out.push_str(&format!("<g class=\"{}\">\n", class));
    }

    pub fn end_group(&mut self) {
        self.out.push_str("</g>\n");
    }

    pub fn filled_circle(&mut self, cx: f64, cy: f64, r: f64) {
        self.out.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\"/>\n",
            cx, cy, r, MARKER_COLOR, MARKER_COLOR
        ));
    }

    pub fn hollow_circle(&mut self, cx: f64, cy: f64, r: f64) {
        self.out.push_str(&format!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"1.2\"/>\n",
            cx, cy, r, MARKER_COLOR
        ));
    }

    pub fn filled_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.out.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\"/>\n",
            x, y, width, height, MARKER_COLOR
        ));
    }

    /// Caption in the bottom-left corner.
    pub fn caption(&mut self, text: &str) {
        self.out.push_str(&format!(
            "<text x=\"6\" y=\"{:.0}\" font-family=\"sans-serif\" font-size=\"12\" font-style=\"italic\">{}</text>\n",
            self.height - 6.0,
            escape(text)
        ));
    }

    pub fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}
