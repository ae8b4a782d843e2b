//! The rendered icon: one root element plus the fixed glyph paths.

use serde::Serialize;

use super::glyph::{GLYPH_PATHS, default_attributes};
use super::markup;
use super::{AttributeSet, AttributeValue, IconError, IconOptions};

/// A single `<path>` child of the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PathElement {
    d: &'static str,
}

impl PathElement {
    /// Path data string.
    #[must_use]
    pub const fn d(&self) -> &'static str {
        self.d
    }
}

/// Immutable icon document produced by [`render`] or [`render_with`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IconDocument {
    root: AttributeSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    paths: [PathElement; 9],
}

impl IconDocument {
    fn from_root(root: AttributeSet, title: Option<String>) -> Self {
        Self {
            root,
            title,
            paths: GLYPH_PATHS.map(|d| PathElement { d }),
        }
    }

    /// Merged attributes of the root `<svg>` element.
    #[must_use]
    pub const fn root(&self) -> &AttributeSet {
        &self.root
    }

    /// Shortcut for `root().get(name)`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.root.get(name)
    }

    /// Accessible title rendered before the paths, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The nine glyph paths in document order.
    #[must_use]
    pub const fn paths(&self) -> &[PathElement; 9] {
        &self.paths
    }

    /// Serialises the document as a single-line SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::InvalidName`] when a root attribute name cannot be
    /// written as XML.
    pub fn to_markup(&self) -> Result<String, IconError> {
        let mut out = String::new();
        markup::write_markup(self, &mut out)?;
        Ok(out)
    }
}

/// Renders the glyph with `attributes` merged over the root defaults.
///
/// Caller values win on key collision; keys the defaults do not know are
/// appended. The paths never change.
#[must_use]
pub fn render(attributes: &AttributeSet) -> IconDocument {
    IconDocument::from_root(default_attributes().merged(attributes), None)
}

/// Renders with shorthand options layered between defaults and `attributes`.
///
/// Merge order is defaults, option-derived presentation attributes,
/// accessibility attributes, then `attributes`.
#[must_use]
pub fn render_with(options: &IconOptions, attributes: &AttributeSet) -> IconDocument {
    let mut root = default_attributes();
    root.merge(&options.presentation_attributes());
    root.merge(&options.accessibility_attributes(attributes));
    root.merge(attributes);
    IconDocument::from_root(root, options.title.clone())
}
