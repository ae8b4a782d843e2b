//! SVG text serialisation for [`IconDocument`].

use std::fmt::Write;

use super::{IconDocument, IconError};

/// Writes `document` to `out` as a single-line SVG element.
///
/// # Errors
///
/// Returns [`IconError::InvalidName`] for root attribute names that are not
/// XML names, or [`IconError::Format`] if `out` rejects a write.
pub fn write_markup<W: Write>(document: &IconDocument, out: &mut W) -> Result<(), IconError> {
    out.write_str("<svg")?;
    for (name, value) in document.root().iter() {
        if !is_xml_name(name) {
            return Err(IconError::InvalidName {
                name: name.to_string(),
            });
        }
        write!(out, " {name}=\"")?;
        write_escaped(out, &value.to_string())?;
        out.write_char('"')?;
    }
    out.write_char('>')?;
    if let Some(title) = document.title() {
        out.write_str("<title>")?;
        write_escaped(out, title)?;
        out.write_str("</title>")?;
    }
    for path in document.paths() {
        write!(out, "<path d=\"{}\"/>", path.d())?;
    }
    out.write_str("</svg>")?;
    Ok(())
}

fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == ':')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.'))
}

fn write_escaped<W: Write>(out: &mut W, text: &str) -> std::fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\'' => out.write_str("&apos;")?,
            _ => out.write_char(ch)?,
        }
    }
    Ok(())
}
