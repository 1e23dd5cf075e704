//! Glyph strip pipeline module
//!
//! This module turns one vector template into a horizontal strip of rasterized
//! glyphs, with separate modules for template substitution, rasterization,
//! composition, encoding and the orchestration tying them together.

pub mod template;
pub mod raster;
pub mod compose;
pub mod canvas;
pub mod config;
pub mod conversions;
pub mod common;

pub use common::{
    GlyphStripError,
    Result,
};

pub use template::{
    GlyphFileNames,
    Placeholder,
    PlaceholderSubstitutor,
    TemplateSubstitutor,
};

pub use raster::{
    read_raster,
    ExportFlags,
    InkscapeConverter,
    RasterConverter,
    RasterImage,
    RasterizerOptions,
};

pub use compose::{
    combine_horizontally,
    Slot,
    StripLayout,
};

pub use canvas::{
    CanvasWriter,
    EncodeOptions,
    OutputFormat,
    PngCompression,
    StandardCanvasWriter,
    TiffCompression,
};

pub use config::{
    parse_char_list,
    GlyphStripConfig,
    GlyphStripConfigBuilder,
};

pub use conversions::{
    SvgToStripPipeline,
};
