//! Glyph strip configuration types

use std::path::PathBuf;

use crate::glyph_pipeline::canvas::types::EncodeOptions;
use crate::glyph_pipeline::common::error::{GlyphStripError, Result};
use crate::glyph_pipeline::raster::types::RasterizerOptions;
use crate::glyph_pipeline::template::types::Placeholder;

pub const DEFAULT_TEMPLATE: &str = "template.svg";
pub const DEFAULT_HEIGHT: u32 = 64;
pub const DEFAULT_CHARS: &str = "A,B,C,D,E,F,G,H,I,J,K,L,M,N,O,P,Q,R,S,T,U,V,W,X,Y,Z";

/// Splits a comma separated character list, keeping order and duplicates.
pub fn parse_char_list(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

/// Configuration for one glyph strip run
#[derive(Debug, Clone)]
pub struct GlyphStripConfig {
    /// Vector template containing the placeholder
    pub template: PathBuf,
    /// Height of every rasterized glyph in pixels
    pub height: u32,
    /// Tokens to render, in output order
    pub chars: Vec<String>,
    pub placeholder: Placeholder,
    pub rasterizer: RasterizerOptions,
    pub encode: EncodeOptions,
}

impl Default for GlyphStripConfig {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            height: DEFAULT_HEIGHT,
            chars: parse_char_list(DEFAULT_CHARS),
            placeholder: Placeholder::default(),
            rasterizer: RasterizerOptions::default(),
            encode: EncodeOptions::default(),
        }
    }
}

impl GlyphStripConfig {
    pub fn builder() -> GlyphStripConfigBuilder {
        GlyphStripConfigBuilder::default()
    }

    /// Rejects settings that could only produce a degenerate strip.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 {
            return Err(GlyphStripError::InvalidConfig(
                "height must be a positive number of pixels".to_string(),
            ));
        }
        if self.chars.is_empty() {
            return Err(GlyphStripError::InvalidConfig(
                "character list is empty".to_string(),
            ));
        }
        if let Some(index) = self.chars.iter().position(|c| c.is_empty()) {
            return Err(GlyphStripError::InvalidConfig(format!(
                "character #{index} is empty"
            )));
        }
        Ok(())
    }
}

/// Builder for GlyphStripConfig
#[derive(Default)]
pub struct GlyphStripConfigBuilder {
    template: Option<PathBuf>,
    height: Option<u32>,
    chars: Option<Vec<String>>,
    placeholder: Option<Placeholder>,
    rasterizer: Option<RasterizerOptions>,
    encode: Option<EncodeOptions>,
}

impl GlyphStripConfigBuilder {
    pub fn template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn chars<I, S>(mut self, chars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chars = Some(chars.into_iter().map(Into::into).collect());
        self
    }

    pub fn placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn rasterizer(mut self, rasterizer: RasterizerOptions) -> Self {
        self.rasterizer = Some(rasterizer);
        self
    }

    pub fn encode(mut self, encode: EncodeOptions) -> Self {
        self.encode = Some(encode);
        self
    }

    pub fn build(self) -> GlyphStripConfig {
        let default = GlyphStripConfig::default();
        GlyphStripConfig {
            template: self.template.unwrap_or(default.template),
            height: self.height.unwrap_or(default.height),
            chars: self.chars.unwrap_or(default.chars),
            placeholder: self.placeholder.unwrap_or(default.placeholder),
            rasterizer: self.rasterizer.unwrap_or(default.rasterizer),
            encode: self.encode.unwrap_or(default.encode),
        }
    }
}
