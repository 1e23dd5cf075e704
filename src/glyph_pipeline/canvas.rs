//! Canvas encoding module
//!
//! This module serializes the combined glyph strip to PNG or TIFF.

mod writer;
mod standard_canvas_writer;
pub mod types;

pub use writer::CanvasWriter;
pub use standard_canvas_writer::StandardCanvasWriter;
pub use types::{EncodeOptions, OutputFormat, PngCompression, TiffCompression};
