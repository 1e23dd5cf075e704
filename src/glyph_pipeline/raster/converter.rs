use std::path::Path;

use crate::glyph_pipeline::common::error::Result;

pub trait RasterConverter {
    /// Rasterizes `source` into `destination` at `height` pixels tall.
    fn convert(&self, source: &Path, destination: &Path, height: u32) -> Result<()>;
}
