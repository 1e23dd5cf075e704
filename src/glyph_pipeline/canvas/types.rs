//! Output encoding types

/// File format of the combined image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Tiff,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Tiff => "tiff",
        }
    }
}

/// PNG compression effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    Fast,
    #[default]
    Default,
    Best,
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression at the balanced level
    #[default]
    Deflate,
}

/// How the combined canvas is serialized
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub format: OutputFormat,
    pub png_compression: PngCompression,
    pub tiff_compression: TiffCompression,
    /// Horizontal differencing before TIFF compression. Ignored for PNG.
    pub tiff_predictor: bool,
}
