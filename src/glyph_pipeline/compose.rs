//! Image composition module
//!
//! This module places an ordered sequence of glyph rasters side by side on one canvas.

mod layout;
mod horizontal;

pub use layout::{Slot, StripLayout};
pub use horizontal::combine_horizontally;
