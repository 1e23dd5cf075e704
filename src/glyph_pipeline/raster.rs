//! Raster conversion module
//!
//! This module drives the external vector-to-raster tool and decodes what it produces.

mod converter;
mod inkscape_converter;
mod decode;
pub mod types;

pub use converter::RasterConverter;
pub use inkscape_converter::InkscapeConverter;
pub use decode::read_raster;
pub use types::{ExportFlags, RasterImage, RasterizerOptions};
