//! DOM-free icon model: attributes, glyph geometry, rendering and markup.

pub mod attributes;
pub mod document;
pub mod error;
pub mod glyph;
pub mod markup;
pub mod options;

pub use attributes::{AttributeSet, AttributeValue, normalize_name};
pub use document::{IconDocument, PathElement, render, render_with};
pub use error::IconError;
pub use options::IconOptions;
