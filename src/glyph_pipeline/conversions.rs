//! Pipeline conversions module
//!
//! This module contains the orchestration that turns a template and a
//! character list into one combined glyph strip.

mod svg_to_strip;


pub use svg_to_strip::{SvgToStripPipeline, OUTPUT_STEM};
