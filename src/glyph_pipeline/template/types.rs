//! Template placeholder types

/// Marker in the template that is replaced by each character.
///
/// The full match is `before + marker + after`; only the marker is swapped, the
/// surrounding context is written back unchanged. The default matches the text
/// of an SVG `<tspan>` that contains exactly `A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub before: String,
    pub marker: String,
    pub after: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            before: ">".to_string(),
            marker: "A".to_string(),
            after: "</tspan>".to_string(),
        }
    }
}

impl Placeholder {
    /// Placeholder with the default `<tspan>` context and a custom marker.
    pub fn tspan(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            ..Self::default()
        }
    }

    /// The literal byte sequence searched for in the template.
    pub fn pattern(&self) -> String {
        format!("{}{}{}", self.before, self.marker, self.after)
    }

    /// The byte sequence written in place of the pattern for `value`.
    pub fn replacement(&self, value: &str) -> String {
        format!("{}{}{}", self.before, escape_xml_text(value), self.after)
    }
}

fn escape_xml_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
