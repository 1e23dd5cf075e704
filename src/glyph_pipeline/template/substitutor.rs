use std::path::Path;

use crate::glyph_pipeline::common::error::Result;

pub trait TemplateSubstitutor {
    /// Writes a copy of `template` to `destination` with the placeholder replaced by `value`.
    fn substitute(&self, template: &Path, value: &str, destination: &Path) -> Result<()>;
}
