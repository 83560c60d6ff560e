//! HTML page assembly.
//!
//! Every page is the same head, header and footer around a page-specific
//! body. User-supplied text is escaped; generated SVG is embedded as-is.

use quick_xml::escape::escape;

use map_common::MapStyle;

use crate::pipeline::GeneratedMap;

/// Sample data shown in the coordinates box.
pub const SAMPLE_COORDINATES: &str = "-42.12344,147.43321
-41.34221,145.43442
-43.22134,146.35521
-43.22133,146.35522";

const PLACEHOLDER_TEXT: &str =
    "Please enter array of coordinates, in comma-delimited format, in decimal degrees";

const HEADER: &str = r#"<header><a href="/">Tasmanian distribution maps</a></header>
"#;

const FOOTER: &str = r#"<footer>Coordinates in decimal degrees (WGS84). Voucher flag: 1 = vouchered specimen, 0 = anecdotal record.</footer>
</body>
</html>
"#;

fn head(title: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link rel="stylesheet" type="text/css" href="/style.css">
</head>
<body>
"#,
        escape(title)
    )
}

fn page(title: &str, body: &str) -> String {
    let mut html = head(title);
    html.push_str(HEADER);
    html.push_str("<main>\n");
    html.push_str(body);
    html.push_str("</main>\n");
    html.push_str(FOOTER);
    html
}

/// `GET /`: the coordinate entry form.
pub fn data_entry_page() -> String {
    let options: String = MapStyle::ALL
        .iter()
        .map(|style| format!("<option value=\"{0}\">{0}</option>", style.as_str()))
        .collect();

    let body = format!(
        r#"<h1>Data entry form</h1>
<form action="/map" method="post">
    <label for="taxon">Taxon name</label>
    <input type="text" id="taxon" name="taxon" required>
    <label for="maptype">Map type</label>
    <select id="maptype" name="maptype">{options}</select>
    <label for="coordinates">{placeholder}</label>
    <textarea id="coordinates" name="coordinates" placeholder="{sample}"></textarea>
    <button type="submit">Draw map</button>
</form>
"#,
        options = options,
        placeholder = PLACEHOLDER_TEXT,
        sample = escape(SAMPLE_COORDINATES),
    );
    page("Data entry form", &body)
}

/// `POST /map`: the generated map inline, with a download link when the map
/// was stored.
pub fn map_page(generated: &GeneratedMap, requested_style: &str) -> String {
    let title = format!("Preview map for {}", generated.taxon_name);

    let mut body = format!("<h1>{}</h1>\n", escape(&title));
    if generated.svg_body.is_empty() {
        body.push_str(&format!(
            "<p class=\"message\">No map drawn for map type '{}'.</p>\n",
            escape(requested_style)
        ));
    } else {
        body.push_str("<div class=\"map\">\n");
        body.push_str(inline_svg(&generated.svg_body));
        body.push_str("</div>\n");
    }

    if generated.skipped > 0 {
        body.push_str(&format!(
            "<p class=\"note\">{} of {} records could not be read and were left off the map.</p>\n",
            generated.skipped,
            generated.skipped + generated.record_count
        ));
    }
    if generated.stored {
        body.push_str("<p><a href=\"/mapfile\">Download SVG</a></p>\n");
    }
    body.push_str("<p><a href=\"/\">Draw another map</a></p>\n");

    page(&title, &body)
}

/// A page carrying a single fixed message.
pub fn message_page(title: &str, message: &str) -> String {
    let body = format!(
        "<h1>{}</h1>\n<p class=\"message\">{}</p>\n<p><a href=\"/\">Back to data entry</a></p>\n",
        escape(title),
        escape(message)
    );
    page(title, &body)
}

/// Strip the XML prolog so the SVG can sit inside HTML.
fn inline_svg(svg: &str) -> &str {
    let trimmed = svg.trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some(end) = trimmed.find("?>") {
            return trimmed[end + 2..].trim_start();
        }
    }
    trimmed
}
