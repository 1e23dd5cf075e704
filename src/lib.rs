pub mod glyph_pipeline;
pub mod logger;
