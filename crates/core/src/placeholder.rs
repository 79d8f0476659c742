//! Placeholder SVG rendering.
//!
//! Failed scenes point at `/placeholder.svg?height=..&width=..&text=..`; this
//! module turns those query values into a small SVG document.

use serde::Deserialize;

pub const DEFAULT_HEIGHT: u32 = 300;
pub const DEFAULT_WIDTH: u32 = 400;
pub const MAX_DIMENSION: u32 = 4096;

/// Raw query values as they arrive on the placeholder URL.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceholderParams {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub text: Option<String>,
}

/// Clamp a requested dimension into `1..=MAX_DIMENSION`.
pub fn clamp_dimension(value: Option<u32>, default: u32) -> u32 {
    value.unwrap_or(default).clamp(1, MAX_DIMENSION)
}

/// Escape the five XML special characters.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the placeholder SVG.
///
/// `text` is expected already URL-decoded (the query extractor turns `+`
/// into a space), so a literal `+` is kept as is.
pub fn render_svg(params: &PlaceholderParams) -> String {
    let height = clamp_dimension(params.height, DEFAULT_HEIGHT);
    let width = clamp_dimension(params.width, DEFAULT_WIDTH);
    let label = params
        .text
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{width}\u{00d7}{height}"));
    let label = escape_xml(&label);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}"><rect width="100%" height="100%" fill="#fdf2f8"/><text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-family="sans-serif" font-size="24" fill="#9d174d">{label}</text></svg>"##
    )
}
