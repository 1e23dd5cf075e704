use std::io::{Cursor, Write};

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use tracing::debug;

use crate::glyph_pipeline::canvas::types::{EncodeOptions, OutputFormat, PngCompression, TiffCompression};
use crate::glyph_pipeline::canvas::writer::CanvasWriter;
use crate::glyph_pipeline::common::error::{GlyphStripError, Result};
use crate::glyph_pipeline::raster::types::RasterImage;

pub struct StandardCanvasWriter;

impl StandardCanvasWriter {
    fn write_png(&self, canvas: &RasterImage, output: &mut dyn Write, options: &EncodeOptions) -> Result<()> {
        let compression = match options.png_compression {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        };

        PngEncoder::new_with_quality(output, compression, FilterType::Adaptive)
            .write_image(
                canvas.as_raw(),
                canvas.width(),
                canvas.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| GlyphStripError::Encode(e.to_string()))
    }

    fn write_tiff(&self, canvas: &RasterImage, output: &mut dyn Write, options: &EncodeOptions) -> Result<()> {
        let mut buffer = Vec::new();

        let compression = match options.tiff_compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::Deflate => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| GlyphStripError::Encode(e.to_string()))?
            .with_compression(compression);

        if options.tiff_predictor {
            encoder = encoder.with_predictor(tiff::tags::Predictor::Horizontal);
        }

        encoder.write_image::<tiff::encoder::colortype::RGBA8>(
            canvas.width(),
            canvas.height(),
            canvas.as_raw(),
        ).map_err(|e| GlyphStripError::Encode(e.to_string()))?;

        output
            .write_all(&buffer)
            .map_err(|e| GlyphStripError::Encode(e.to_string()))
    }
}

impl CanvasWriter for StandardCanvasWriter {
    fn write_canvas(&self, canvas: &RasterImage, output: &mut dyn Write, options: &EncodeOptions) -> Result<()> {
        debug!(
            format = ?options.format,
            width = canvas.width(),
            height = canvas.height(),
            "Encoding combined canvas"
        );

        match options.format {
            OutputFormat::Png => self.write_png(canvas, output, options)?,
            OutputFormat::Tiff => self.write_tiff(canvas, output, options)?,
        }

        debug!("Canvas encoding complete");
        Ok(())
    }
}
