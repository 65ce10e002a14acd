//! Renderers for the composed map.
//!
//! `html` produces a standalone page: the map is embedded as JSON inside a
//! `<script type="application/json">` element and a small Leaflet script builds everything
//! from it, popups included, using text nodes only.  `json` is the same description, pretty
//! printed.
//!

use tracing::trace;

use crate::{Map, Output};

/// Page skeleton
const TEMPLATE: &str = include_str!("map.html");

pub const TITLE: &str = "Earthquakes & tectonic plates";

/// Render `map` in the requested format.
///
#[tracing::instrument(skip(map))]
pub fn render(map: &Map, output: Output) -> Result<String, serde_json::Error> {
    trace!("render");

    match output {
        Output::Html => render_html(map),
        Output::Json => serde_json::to_string_pretty(map),
    }
}

fn render_html(map: &Map) -> Result<String, serde_json::Error> {
    let data = escape_json(&serde_json::to_string(map)?);
    let page = TEMPLATE
        .replace("{{GENERATOR}}", &escape_html(&crate::version()))
        .replace("{{TITLE}}", &escape_html(TITLE))
        .replace("{{MAP}}", &data);
    Ok(page)
}

/// Make JSON safe to embed in a `<script>` element.  These characters can only appear
/// inside strings so the JSON value is unchanged.
///
pub fn escape_json(s: &str) -> String {
    s.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
