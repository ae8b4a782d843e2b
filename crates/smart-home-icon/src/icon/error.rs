//! Error types for attribute parsing and markup serialisation.

use thiserror::Error;

/// Structured errors raised while building attribute sets or writing markup.
///
/// Rendering itself never fails; these only surface from the helpers that
/// turn external input into an [`AttributeSet`](super::AttributeSet) or an
/// [`IconDocument`](super::IconDocument) into text.
#[derive(Debug, Error)]
pub enum IconError {
    /// Input was not of the form `name=value`.
    #[error("attribute '{input}' is not of the form name=value")]
    MalformedPair {
        /// Raw input that failed to split.
        input: String,
    },

    /// Attribute name was empty after trimming.
    #[error("attribute name must not be empty")]
    EmptyName,

    /// Attribute name cannot be written as an XML attribute.
    #[error("attribute name '{name}' cannot be written into svg markup")]
    InvalidName {
        /// Offending attribute name.
        name: String,
    },

    /// JSON value could not be represented as an attribute value.
    #[error("attribute '{name}' has an unsupported {kind} value")]
    UnsupportedValue {
        /// Attribute carrying the value.
        name: String,
        /// JSON kind that was rejected.
        kind: &'static str,
    },

    /// Attribute JSON was not an object.
    #[error("attribute set must be a JSON object")]
    NotAnObject,

    /// Attribute JSON failed to parse.
    #[error("invalid attribute JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Markup sink rejected a write.
    #[error("failed to write svg markup")]
    Format(#[from] std::fmt::Error),
}
