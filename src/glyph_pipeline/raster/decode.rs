use std::path::Path;

use tracing::debug;

use crate::glyph_pipeline::common::error::{GlyphStripError, Result};
use crate::glyph_pipeline::raster::types::RasterImage;

/// Decodes a rasterized glyph and converts it to RGBA8.
pub fn read_raster(path: &Path) -> Result<RasterImage> {
    let decoded = image::ImageReader::open(path)
        .map_err(|e| GlyphStripError::Decode(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| GlyphStripError::Decode(format!("{}: {}", path.display(), e)))?
        .decode()
        .map_err(|e| GlyphStripError::Decode(format!("{}: {}", path.display(), e)))?;

    debug!(
        path = %path.display(),
        width = decoded.width(),
        height = decoded.height(),
        color = ?decoded.color(),
        "Decoded raster"
    );

    Ok(decoded.into_rgba8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_reads_png_as_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyph.png");
        let mut glyph = RgbaImage::new(3, 2);
        glyph.put_pixel(2, 1, Rgba([10, 20, 30, 255]));
        glyph.save(&path).unwrap();

        let decoded = read_raster(&path).unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("glyph.png");
        std::fs::write(&path, b"not a png at all").unwrap();

        assert!(matches!(read_raster(&path), Err(GlyphStripError::Decode(_))));
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            read_raster(&dir.path().join("missing.png")),
            Err(GlyphStripError::Decode(_))
        ));
    }
}
