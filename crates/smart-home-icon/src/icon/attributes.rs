//! Open-ended attribute bags forwarded onto the icon's root element.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use super::IconError;

/// JSX-style and snake-case spellings of the root defaults.
const DEFAULT_ALIASES: [(&str, &str); 9] = [
    ("className", "class"),
    ("class_name", "class"),
    ("strokeWidth", "stroke-width"),
    ("stroke_width", "stroke-width"),
    ("strokeLinecap", "stroke-linecap"),
    ("stroke_linecap", "stroke-linecap"),
    ("strokeLinejoin", "stroke-linejoin"),
    ("stroke_linejoin", "stroke-linejoin"),
    ("view_box", "viewBox"),
];

/// Resolves an attribute name to the key it is stored under.
///
/// Only the aliases of the root defaults are rewritten, so `strokeWidth`
/// collides with the default `stroke-width`. Every other name is forwarded
/// verbatim apart from surrounding whitespace.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let name = raw.trim();
    DEFAULT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map_or(name, |(_, canonical)| *canonical)
        .to_string()
}

/// A single attribute value as it will be written to the DOM.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag, written as `true`/`false`.
    Bool(bool),
    /// Numeric value such as a size or stroke width.
    Number(f64),
    /// Free-form text.
    Text(String),
}

impl AttributeValue {
    /// Interprets raw text the way a command line or query string would.
    ///
    /// `true`/`false` become [`AttributeValue::Bool`], finite numbers become
    /// [`AttributeValue::Number`], everything else stays text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => raw
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map_or_else(|| Self::Text(raw.to_string()), Self::Number),
        }
    }

    /// Text payload, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Numeric payload, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered attribute map with last-write-wins insertion.
///
/// Replacing a key keeps its original position; new keys are appended. This
/// keeps the icon defaults first in the rendered markup no matter what the
/// caller overrides.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, Option<AttributeValue>>",
    into = "IndexMap<String, AttributeValue>"
)]
pub struct AttributeSet {
    entries: IndexMap<String, AttributeValue>,
}

impl AttributeSet {
    /// Empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`AttributeSet::insert`].
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets `name` to `value`, returning the value it replaced.
    pub fn insert(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.entries.insert(normalize_name(name), value.into())
    }

    /// Looks up a value by name (normalised the same way as insertion).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(normalize_name(name).as_str())
    }

    /// Whether `name` is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(normalize_name(name).as_str())
    }

    /// Whether any attribute name starts with `prefix`.
    #[must_use]
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.entries.keys().any(|key| key.starts_with(prefix))
    }

    /// Removes `name`, preserving the order of the remaining entries.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.entries.shift_remove(normalize_name(name).as_str())
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Attribute names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Applies `overrides` on top of `self`; overriding values win.
    pub fn merge(&mut self, overrides: &Self) {
        for (name, value) in &overrides.entries {
            if let Some(previous) = self.entries.insert(name.clone(), value.clone()) {
                if previous != *value {
                    trace!(
                        attribute = %name,
                        from = %previous,
                        to = %value,
                        "attribute overridden"
                    );
                }
            }
        }
    }

    /// Returns a copy of `self` with `overrides` applied.
    #[must_use]
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut out = self.clone();
        out.merge(overrides);
        out
    }

    /// Parses a single `name=value` pair.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::MalformedPair`] when there is no `=` and
    /// [`IconError::EmptyName`] when the name is blank.
    pub fn parse_pair(input: &str) -> Result<(String, AttributeValue), IconError> {
        let (name, value) = input
            .split_once('=')
            .ok_or_else(|| IconError::MalformedPair {
                input: input.to_string(),
            })?;
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(IconError::EmptyName);
        }
        Ok((name, AttributeValue::parse(value.trim())))
    }

    /// Builds a set from `name=value` pairs; later pairs win.
    ///
    /// # Errors
    ///
    /// Propagates the first [`AttributeSet::parse_pair`] failure.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, IconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for pair in pairs {
            let (name, value) = Self::parse_pair(pair.as_ref())?;
            set.entries.insert(name, value);
        }
        debug!(attributes = set.len(), "parsed attribute pairs");
        Ok(set)
    }

    /// Parses a JSON object of attributes, keeping the document's key order.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::Json`] for malformed JSON and the errors of
    /// [`AttributeSet::from_json_value`] otherwise.
    pub fn from_json_str(input: &str) -> Result<Self, IconError> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json_value(&value)
    }

    /// Converts a JSON object into an attribute set in key order.
    ///
    /// `null` entries are skipped so a host can clear an attribute by nulling
    /// it out.
    ///
    /// # Errors
    ///
    /// Returns [`IconError::NotAnObject`] for non-object input,
    /// [`IconError::UnsupportedValue`] for nested arrays or objects and
    /// [`IconError::EmptyName`] for blank keys.
    pub fn from_json_value(value: &Value) -> Result<Self, IconError> {
        let object = value.as_object().ok_or(IconError::NotAnObject)?;
        let mut set = Self::new();
        for (name, raw) in object {
            let value = match raw {
                Value::Null => continue,
                Value::Bool(flag) => AttributeValue::Bool(*flag),
                Value::Number(number) => number.as_f64().map_or_else(
                    || AttributeValue::Text(number.to_string()),
                    AttributeValue::Number,
                ),
                Value::String(text) => AttributeValue::Text(text.clone()),
                Value::Array(_) => {
                    return Err(IconError::UnsupportedValue {
                        name: name.clone(),
                        kind: "array",
                    });
                }
                Value::Object(_) => {
                    return Err(IconError::UnsupportedValue {
                        name: name.clone(),
                        kind: "object",
                    });
                }
            };
            let canonical = normalize_name(name);
            if canonical.is_empty() {
                return Err(IconError::EmptyName);
            }
            set.entries.insert(canonical, value);
        }
        debug!(attributes = set.len(), "loaded attribute set from json");
        Ok(set)
    }
}

impl From<IndexMap<String, Option<AttributeValue>>> for AttributeSet {
    fn from(raw: IndexMap<String, Option<AttributeValue>>) -> Self {
        raw.into_iter()
            .filter_map(|(name, value)| value.map(|value| (name, value)))
            .collect()
    }
}

impl From<AttributeSet> for IndexMap<String, AttributeValue> {
    fn from(set: AttributeSet) -> Self {
        set.entries
    }
}

impl<K, V> FromIterator<(K, V)> for AttributeSet
where
    K: AsRef<str>,
    V: Into<AttributeValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K, V> Extend<(K, V)> for AttributeSet
where
    K: AsRef<str>,
    V: Into<AttributeValue>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name.as_ref(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AttributeSet, AttributeValue, normalize_name};
    use crate::icon::IconError;

    #[test]
    fn default_aliases_resolve_to_svg_spelling() {
        assert_eq!(normalize_name("strokeWidth"), "stroke-width");
        assert_eq!(normalize_name("stroke_linecap"), "stroke-linecap");
        assert_eq!(normalize_name("strokeLinejoin"), "stroke-linejoin");
        assert_eq!(normalize_name("className"), "class");
        assert_eq!(normalize_name("view_box"), "viewBox");
        assert_eq!(normalize_name("  width "), "width");
    }

    #[test]
    fn other_names_pass_through_verbatim() {
        for name in ["viewBox", "tabIndex", "zoomAndPan", "ID", "aria-hidden", "data-testId"] {
            assert_eq!(normalize_name(name), name);
        }
        let set = AttributeSet::new().with("tabIndex", 0).with("ID", "x");
        assert_eq!(set.names().collect::<Vec<_>>(), ["tabIndex", "ID"]);
    }

    #[test]
    fn insert_replaces_in_place_and_appends_new_keys() {
        let mut set = AttributeSet::new().with("width", 24).with("height", 24);
        let previous = set.insert("width", 48);
        set.insert("class", "icon-lg");

        assert_eq!(previous, Some(AttributeValue::Number(24.0)));
        assert_eq!(set.names().collect::<Vec<_>>(), ["width", "height", "class"]);
        assert_eq!(set.get("width"), Some(&AttributeValue::Number(48.0)));
    }

    #[test]
    fn merge_lets_overrides_win() {
        let defaults = AttributeSet::new().with("stroke", "currentColor").with("fill", "none");
        let overrides = AttributeSet::new().with("stroke", "red").with("id", "logo");

        let merged = defaults.merged(&overrides);

        assert_eq!(merged.get("stroke"), Some(&AttributeValue::from("red")));
        assert_eq!(merged.get("fill"), Some(&AttributeValue::from("none")));
        assert_eq!(merged.get("id"), Some(&AttributeValue::from("logo")));
        assert_eq!(defaults.get("stroke"), Some(&AttributeValue::from("currentColor")));
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut set = AttributeSet::from_iter([("a", 1), ("b", 2), ("c", 3)]);
        assert_eq!(set.remove("b"), Some(AttributeValue::Number(2.0)));
        assert_eq!(set.remove("b"), None);
        assert_eq!(set.names().collect::<Vec<_>>(), ["a", "c"]);
    }

    #[test]
    fn values_display_as_dom_strings() {
        assert_eq!(AttributeValue::Number(48.0).to_string(), "48");
        assert_eq!(AttributeValue::Number(1.5).to_string(), "1.5");
        assert_eq!(AttributeValue::Bool(true).to_string(), "true");
        assert_eq!(AttributeValue::from("red").to_string(), "red");
    }

    #[test]
    fn parse_detects_value_kinds() {
        assert_eq!(AttributeValue::parse("48"), AttributeValue::Number(48.0));
        assert_eq!(AttributeValue::parse("false"), AttributeValue::Bool(false));
        assert_eq!(AttributeValue::parse("0 0 24 24"), AttributeValue::from("0 0 24 24"));
        assert_eq!(AttributeValue::parse("inf"), AttributeValue::from("inf"));
    }

    #[test]
    fn pairs_parse_and_reject_malformed_input() -> Result<(), IconError> {
        let set = AttributeSet::from_pairs(["strokeWidth=3", "class = icon-lg", "title=a=b"])?;
        assert_eq!(set.get("stroke-width"), Some(&AttributeValue::Number(3.0)));
        assert_eq!(set.get("class"), Some(&AttributeValue::from("icon-lg")));
        assert_eq!(set.get("title"), Some(&AttributeValue::from("a=b")));

        assert!(matches!(
            AttributeSet::parse_pair("width"),
            Err(IconError::MalformedPair { .. })
        ));
        assert!(matches!(AttributeSet::parse_pair(" =1"), Err(IconError::EmptyName)));
        Ok(())
    }

    #[test]
    fn json_objects_load_scalar_values() -> Result<(), IconError> {
        let set = AttributeSet::from_json_str(
            r#"{"width": 48, "stroke": "red", "focusable": false, "id": null}"#,
        )?;
        assert_eq!(set.len(), 3);
        assert_eq!(set.get("width"), Some(&AttributeValue::Number(48.0)));
        assert_eq!(set.get("focusable"), Some(&AttributeValue::Bool(false)));
        assert!(!set.contains("id"));
        Ok(())
    }

    #[test]
    fn json_loading_keeps_document_order() -> Result<(), IconError> {
        let input = r#"{"width": 48, "class": "a", "aria-label": "x"}"#;
        let loaded = AttributeSet::from_json_str(input)?;
        assert_eq!(loaded.names().collect::<Vec<_>>(), ["width", "class", "aria-label"]);

        let deserialized: AttributeSet = serde_json::from_str(input)?;
        assert_eq!(
            deserialized.names().collect::<Vec<_>>(),
            loaded.names().collect::<Vec<_>>()
        );
        Ok(())
    }

    #[test]
    fn deserialize_skips_nulls_and_resolves_aliases() -> Result<(), serde_json::Error> {
        let set: AttributeSet = serde_json::from_str(r#"{"strokeWidth": 3, "id": null}"#)?;
        assert_eq!(set.get("stroke-width"), Some(&AttributeValue::Number(3.0)));
        assert!(!set.contains("id"));
        Ok(())
    }

    #[test]
    fn json_rejects_nested_and_non_object_input() {
        assert!(matches!(
            AttributeSet::from_json_str(r#"{"style": {"color": "red"}}"#),
            Err(IconError::UnsupportedValue { kind: "object", .. })
        ));
        assert!(matches!(
            AttributeSet::from_json_str(r#"{"d": [1, 2]}"#),
            Err(IconError::UnsupportedValue { kind: "array", .. })
        ));
        assert!(matches!(
            AttributeSet::from_json_str("[1]"),
            Err(IconError::NotAnObject)
        ));
        assert!(matches!(
            AttributeSet::from_json_str("{"),
            Err(IconError::Json(_))
        ));
    }

    #[test]
    fn serde_round_trip_preserves_order() -> Result<(), serde_json::Error> {
        let set = AttributeSet::new().with("width", 48).with("class", "a").with("fill", "none");
        let json = serde_json::to_string(&set)?;
        assert_eq!(json, r#"{"width":48.0,"class":"a","fill":"none"}"#);

        let back: AttributeSet = serde_json::from_str(&json)?;
        assert_eq!(back, set);
        Ok(())
    }
}
