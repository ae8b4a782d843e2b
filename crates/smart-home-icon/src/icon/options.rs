//! Convenience props layered between the glyph defaults and caller attributes.

use serde::{Deserialize, Serialize};

use super::glyph::{DEFAULT_SIZE, DEFAULT_STROKE_WIDTH};
use super::AttributeSet;

/// Shorthand presentation options for the icon.
///
/// Each option expands to one or more root attributes; explicit caller
/// attributes still take precedence over anything derived here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    /// Rendered width and height in pixels.
    pub size: Option<f64>,
    /// Stroke colour.
    pub color: Option<String>,
    /// Stroke width in view-box units.
    pub stroke_width: Option<f64>,
    /// Keep the stroke at its pixel width regardless of `size`.
    pub absolute_stroke_width: bool,
    /// Accessible title; marks the icon as meaningful rather than decorative.
    pub title: Option<String>,
}

impl IconOptions {
    /// Sets [`IconOptions::size`].
    #[must_use]
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets [`IconOptions::color`].
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets [`IconOptions::stroke_width`].
    #[must_use]
    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    /// Sets [`IconOptions::absolute_stroke_width`].
    #[must_use]
    pub fn absolute_stroke_width(mut self, enabled: bool) -> Self {
        self.absolute_stroke_width = enabled;
        self
    }

    /// Sets [`IconOptions::title`].
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Stroke width to write, after absolute scaling.
    ///
    /// Returns `None` when neither an explicit width nor absolute scaling
    /// asks for a change from the default.
    #[must_use]
    pub fn effective_stroke_width(&self) -> Option<f64> {
        if !self.absolute_stroke_width {
            return self.stroke_width;
        }
        let width = self.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH);
        let size = self.size.unwrap_or(f64::from(DEFAULT_SIZE));
        if size > 0.0 {
            Some(width * f64::from(DEFAULT_SIZE) / size)
        } else {
            Some(width)
        }
    }

    /// Root attributes implied by the presentation options.
    #[must_use]
    pub fn presentation_attributes(&self) -> AttributeSet {
        let mut attrs = AttributeSet::new();
        if let Some(size) = self.size {
            attrs.insert("width", size);
            attrs.insert("height", size);
        }
        if let Some(color) = &self.color {
            attrs.insert("stroke", color.as_str());
        }
        if let Some(width) = self.effective_stroke_width() {
            attrs.insert("stroke-width", width);
        }
        attrs
    }

    /// Accessibility attributes for the root element.
    ///
    /// A titled icon is announced as an image; an untitled one is hidden from
    /// assistive technology unless the caller already set an `aria-*`
    /// attribute.
    #[must_use]
    pub fn accessibility_attributes(&self, caller: &AttributeSet) -> AttributeSet {
        match &self.title {
            Some(title) => AttributeSet::new()
                .with("role", "img")
                .with("aria-label", title.as_str()),
            None if caller.contains_prefix("aria-") => AttributeSet::new(),
            None => AttributeSet::new().with("aria-hidden", "true"),
        }
    }
}
