//! Placeholder substitution backed by a literal byte regex.

use std::path::Path;

use regex::bytes::{NoExpand, Regex};
use tracing::{debug, warn};

use crate::glyph_pipeline::common::error::{GlyphStripError, Result};
use crate::glyph_pipeline::template::substitutor::TemplateSubstitutor;
use crate::glyph_pipeline::template::types::Placeholder;

/// Replaces every occurrence of a [`Placeholder`] in the template bytes.
///
/// The template is never parsed as XML, so any text-based vector format works
/// as long as the placeholder context appears verbatim.
pub struct PlaceholderSubstitutor {
    placeholder: Placeholder,
    pattern: Regex,
}

impl PlaceholderSubstitutor {
    pub fn new(placeholder: Placeholder) -> Result<Self> {
        let literal = placeholder.pattern();
        if literal.is_empty() {
            return Err(GlyphStripError::InvalidConfig(
                "placeholder must not be empty".to_string(),
            ));
        }

        let pattern = Regex::new(&regex::escape(&literal))
            .map_err(|e| GlyphStripError::InvalidConfig(format!("placeholder {literal:?}: {e}")))?;

        Ok(Self {
            placeholder,
            pattern,
        })
    }

    /// Returns the substituted bytes and the number of replaced occurrences.
    pub fn substitute_bytes(&self, template: &[u8], value: &str) -> (Vec<u8>, usize) {
        let occurrences = self.pattern.find_iter(template).count();
        let replacement = self.placeholder.replacement(value);
        let substituted = self
            .pattern
            .replace_all(template, NoExpand(replacement.as_bytes()))
            .into_owned();
        (substituted, occurrences)
    }
}

impl TemplateSubstitutor for PlaceholderSubstitutor {
    fn substitute(&self, template: &Path, value: &str, destination: &Path) -> Result<()> {
        let bytes = std::fs::read(template).map_err(|e| {
            GlyphStripError::Substitution(format!("{}: {}", template.display(), e))
        })?;

        let (substituted, occurrences) = self.substitute_bytes(&bytes, value);
        if occurrences == 0 {
            warn!(
                template = %template.display(),
                placeholder = %self.placeholder.pattern(),
                "Placeholder not found in template"
            );
        }
        debug!(occurrences, value, "Substituted placeholder");

        std::fs::write(destination, substituted).map_err(|e| {
            GlyphStripError::Substitution(format!("{}: {}", destination.display(), e))
        })?;

        Ok(())
    }
}
