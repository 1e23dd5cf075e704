use image::{GenericImage, ImageBuffer};
use tracing::{debug, instrument};

use crate::glyph_pipeline::common::error::{GlyphStripError, Result};
use crate::glyph_pipeline::compose::layout::StripLayout;
use crate::glyph_pipeline::raster::types::RasterImage;

/// Places `images` side by side, left to right, on a new transparent canvas.
///
/// The canvas is as wide as all images together and as tall as the tallest.
/// Every image is anchored to the top edge; rows below a shorter image stay
/// transparent. The inputs are only read.
#[instrument(skip(images), fields(count = images.len()))]
pub fn combine_horizontally(images: &[RasterImage]) -> Result<RasterImage> {
    let layout = StripLayout::from_dimensions(images.iter().map(|image| image.dimensions()))?;
    let mut canvas = allocate_canvas(&layout)?;

    for (image, slot) in images.iter().zip(&layout.slots) {
        canvas
            .copy_from(image, slot.x, 0)
            .map_err(|e| GlyphStripError::Composition(format!("placing image at x={}: {}", slot.x, e)))?;
    }

    debug!(width = layout.width, height = layout.height, "Combined canvas");
    Ok(canvas)
}

/// Zeroed RGBA8 buffer for `layout`, reporting allocation failure instead of aborting.
fn allocate_canvas(layout: &StripLayout) -> Result<RasterImage> {
    let len = layout.rgba_len()?;
    let too_large = || {
        GlyphStripError::Composition(format!(
            "failed to allocate {}x{} canvas",
            layout.width, layout.height
        ))
    };

    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len).map_err(|_| too_large())?;
    buffer.resize(len, 0);

    ImageBuffer::from_raw(layout.width, layout.height, buffer).ok_or_else(too_large)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn solid(width: u32, height: u32, value: u8) -> RasterImage {
        ImageBuffer::from_pixel(width, height, Rgba([value, value, value, 255]))
    }

    fn gradient(width: u32, height: u32) -> RasterImage {
        ImageBuffer::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, (x * y) as u8, 200]))
    }

    #[test]
    fn test_images_placed_in_order() {
        let images = vec![solid(10, 5, 1), solid(20, 8, 2), solid(5, 3, 3)];

        let canvas = combine_horizontally(&images).unwrap();

        assert_eq!(canvas.dimensions(), (35, 8));
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([1, 1, 1, 255]));
        assert_eq!(canvas.get_pixel(9, 4), &Rgba([1, 1, 1, 255]));
        assert_eq!(canvas.get_pixel(10, 0), &Rgba([2, 2, 2, 255]));
        assert_eq!(canvas.get_pixel(29, 7), &Rgba([2, 2, 2, 255]));
        assert_eq!(canvas.get_pixel(30, 0), &Rgba([3, 3, 3, 255]));
        assert_eq!(canvas.get_pixel(34, 2), &Rgba([3, 3, 3, 255]));
    }

    #[test]
    fn test_height_is_max_not_sum() {
        let images = vec![solid(1, 5, 1), solid(1, 8, 1), solid(1, 3, 1)];

        let canvas = combine_horizontally(&images).unwrap();

        assert_eq!(canvas.height(), 8);
        assert_eq!(canvas.width(), 3);
    }

    #[test]
    fn test_no_gaps_between_slots() {
        let images = vec![solid(3, 2, 7), solid(4, 2, 7), solid(2, 2, 7)];

        let canvas = combine_horizontally(&images).unwrap();

        assert_eq!(canvas.width(), 9);
        assert!(canvas.pixels().all(|p| *p == Rgba([7, 7, 7, 255])));
    }

    #[test]
    fn test_short_image_top_aligned_with_clear_fill_below() {
        let images = vec![solid(10, 3, 9), solid(2, 8, 4)];

        let canvas = combine_horizontally(&images).unwrap();

        for x in 0..10 {
            for y in 0..3 {
                assert_eq!(canvas.get_pixel(x, y), &Rgba([9, 9, 9, 255]));
            }
            for y in 3..8 {
                assert_eq!(canvas.get_pixel(x, y), &CLEAR, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let images = vec![gradient(6, 4), gradient(3, 7)];
        let before = images.clone();

        let _ = combine_horizontally(&images).unwrap();

        assert_eq!(images, before);
    }

    #[test]
    fn test_single_image_is_identity() {
        let image = gradient(13, 9);

        let canvas = combine_horizontally(std::slice::from_ref(&image)).unwrap();

        assert_eq!(canvas, image);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_unallocatable_canvas_is_composition_error() {
        let layout = StripLayout::from_dimensions([(u32::MAX, 1 << 30)]).unwrap();

        let err = allocate_canvas(&layout).unwrap_err();

        assert!(matches!(err, GlyphStripError::Composition(_)));
        assert!(err.to_string().contains("failed to allocate"));
    }

    #[test]
    fn test_empty_sequence_is_composition_error() {
        let result = combine_horizontally(&[]);

        let err = result.unwrap_err();
        assert!(matches!(err, GlyphStripError::Composition(_)));
        assert_eq!(err.stage(), "composition");
    }
}
