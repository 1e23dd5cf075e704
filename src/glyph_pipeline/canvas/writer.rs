use std::io::Write;

use crate::glyph_pipeline::canvas::types::EncodeOptions;
use crate::glyph_pipeline::common::error::Result;
use crate::glyph_pipeline::raster::types::RasterImage;

pub trait CanvasWriter {
    fn write_canvas(&self, canvas: &RasterImage, output: &mut dyn Write, options: &EncodeOptions) -> Result<()>;
}
