//! Geometry of a horizontal glyph strip

use crate::glyph_pipeline::common::error::{GlyphStripError, Result};

/// Region of the canvas occupied by one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Left edge on the canvas. The top edge is always 0.
    pub x: u32,
    pub width: u32,
    pub height: u32,
}

/// Canvas size and per-image placement, computed before any pixel is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    pub width: u32,
    pub height: u32,
    pub slots: Vec<Slot>,
}

impl StripLayout {
    /// Lays out images of the given `(width, height)` left to right, top aligned.
    pub fn from_dimensions<I>(dimensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut x: u32 = 0;
        let mut height = 0;
        let mut slots = Vec::new();

        for (w, h) in dimensions {
            slots.push(Slot { x, width: w, height: h });
            x = x.checked_add(w).ok_or_else(|| {
                GlyphStripError::Composition(format!(
                    "combined width overflows after {} images",
                    slots.len()
                ))
            })?;
            height = height.max(h);
        }

        if slots.is_empty() {
            return Err(GlyphStripError::Composition(
                "no images to combine".to_string(),
            ));
        }
        if x == 0 || height == 0 {
            return Err(GlyphStripError::Composition(format!(
                "degenerate canvas {}x{}",
                x, height
            )));
        }

        Ok(Self {
            width: x,
            height,
            slots,
        })
    }

    /// Size in bytes of an RGBA8 buffer for this layout.
    pub fn rgba_len(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                GlyphStripError::Composition(format!(
                    "canvas {}x{} is too large to allocate",
                    self.width, self.height
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_running_sum_of_widths() {
        let layout = StripLayout::from_dimensions([(10, 5), (20, 8), (5, 3)]).unwrap();

        assert_eq!(layout.width, 35);
        assert_eq!(layout.height, 8);
        let offsets: Vec<_> = layout.slots.iter().map(|s| s.x).collect();
        assert_eq!(offsets, vec![0, 10, 30]);
    }

    #[test]
    fn test_zero_width_images_take_no_space() {
        let layout = StripLayout::from_dimensions([(4, 4), (0, 9), (4, 4)]).unwrap();

        assert_eq!(layout.width, 8);
        assert_eq!(layout.height, 9);
        assert_eq!(layout.slots[2].x, 4);
    }

    #[test]
    fn test_empty_sequence_rejected() {
        let result = StripLayout::from_dimensions(std::iter::empty());
        assert!(matches!(result, Err(GlyphStripError::Composition(_))));
    }

    #[test]
    fn test_degenerate_canvas_rejected() {
        assert!(StripLayout::from_dimensions([(0, 5), (0, 7)]).is_err());
        assert!(StripLayout::from_dimensions([(5, 0)]).is_err());
    }

    #[test]
    fn test_width_overflow_rejected() {
        let result = StripLayout::from_dimensions([(u32::MAX, 1), (1, 1)]);
        assert!(matches!(result, Err(GlyphStripError::Composition(_))));
    }
}
