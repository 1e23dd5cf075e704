use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlyphStripError {
    #[error("Failed to substitute template: {0}")]
    Substitution(String),

    #[error("Rasterizer failed: {0}")]
    Conversion(String),

    #[error("Rasterizer `{program}` did not finish within {timeout:?}")]
    ConversionTimeout { program: String, timeout: Duration },

    #[error("Failed to decode raster image: {0}")]
    Decode(String),

    #[error("Failed to combine images: {0}")]
    Composition(String),

    #[error("Failed to encode combined image: {0}")]
    Encode(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Glyph #{index} ({token:?}): {source}")]
    Glyph {
        index: usize,
        token: String,
        #[source]
        source: Box<GlyphStripError>,
    },
}

impl GlyphStripError {
    /// Name of the pipeline stage that produced the error.
    ///
    /// For per-glyph failures this is the stage of the wrapped error.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Substitution(_) => "substitution",
            Self::Conversion(_) | Self::ConversionTimeout { .. } => "conversion",
            Self::Decode(_) => "decode",
            Self::Composition(_) => "composition",
            Self::Encode(_) => "encode",
            Self::InvalidConfig(_) => "configuration",
            Self::Glyph { source, .. } => source.stage(),
        }
    }

    /// The character token whose processing failed, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Glyph { token, .. } => Some(token),
            _ => None,
        }
    }

    pub(crate) fn for_glyph(self, index: usize, token: &str) -> Self {
        Self::Glyph {
            index,
            token: token.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, GlyphStripError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_error_reports_inner_stage() {
        let err = GlyphStripError::Conversion("exit status: 1".to_string()).for_glyph(1, "B");

        assert_eq!(err.stage(), "conversion");
        assert_eq!(err.token(), Some("B"));
        assert!(err.to_string().contains("\"B\""));
        assert!(err.to_string().contains("exit status: 1"));
    }

    #[test]
    fn test_timeout_is_a_conversion_failure() {
        let err = GlyphStripError::ConversionTimeout {
            program: "inkscape".to_string(),
            timeout: Duration::from_secs(2),
        };

        assert_eq!(err.stage(), "conversion");
        assert_eq!(err.token(), None);
    }
}
