//! Fixed geometry and root defaults for the smart home glyph.

use super::AttributeSet;

/// Namespace written on the root `<svg>` element.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Coordinate system every path is drawn in.
pub const VIEW_BOX: &str = "0 0 24 24";

/// Default rendered width and height in pixels.
pub const DEFAULT_SIZE: u32 = 24;

/// Default stroke width in view-box units.
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Path data for the nine strokes of the glyph, in document order.
///
/// Four axis ticks, the droplet/leaf body, then four diagonal corner ticks.
pub const GLYPH_PATHS: [&str; 9] = [
    "M12 2v2",
    "M12 20v2",
    "M2 12h2",
    "M20 12h2",
    "M12 7.5c-2.4 2.6-4 4.5-4 6.5a4 4 0 0 0 8 0c0-2-1.6-3.9-4-6.5z",
    "m4.93 4.93 1.41 1.41",
    "m17.66 17.66 1.41 1.41",
    "m6.34 17.66-1.41 1.41",
    "m19.07 4.93-1.41 1.41",
];

/// Root attributes applied before any caller override.
#[must_use]
pub fn default_attributes() -> AttributeSet {
    AttributeSet::new()
        .with("xmlns", SVG_NAMESPACE)
        .with("width", DEFAULT_SIZE)
        .with("height", DEFAULT_SIZE)
        .with("viewBox", VIEW_BOX)
        .with("fill", "none")
        .with("stroke", "currentColor")
        .with("stroke-width", DEFAULT_STROKE_WIDTH)
        .with("stroke-linecap", "round")
        .with("stroke-linejoin", "round")
}
