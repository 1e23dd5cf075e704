use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::glyph_pipeline::{
    canvas::{CanvasWriter, StandardCanvasWriter},
    common::error::{GlyphStripError, Result},
    compose::combine_horizontally,
    config::GlyphStripConfig,
    raster::{read_raster, InkscapeConverter, RasterConverter, RasterImage},
    template::{GlyphFileNames, PlaceholderSubstitutor, TemplateSubstitutor},
};

/// File stem of the combined image inside the scratch directory.
pub const OUTPUT_STEM: &str = "output";

pub struct SvgToStripPipeline<S: TemplateSubstitutor, C: RasterConverter, W: CanvasWriter> {
    substitutor: S,
    converter: C,
    writer: W,
    config: GlyphStripConfig,
}

impl SvgToStripPipeline<PlaceholderSubstitutor, InkscapeConverter, StandardCanvasWriter> {
    pub fn new(config: GlyphStripConfig) -> Result<Self> {
        Ok(Self {
            substitutor: PlaceholderSubstitutor::new(config.placeholder.clone())?,
            converter: InkscapeConverter::new(config.rasterizer.clone()),
            writer: StandardCanvasWriter,
            config,
        })
    }
}

impl<S: TemplateSubstitutor, C: RasterConverter, W: CanvasWriter> SvgToStripPipeline<S, C, W> {
    pub fn with_custom(substitutor: S, converter: C, writer: W, config: GlyphStripConfig) -> Self {
        Self {
            substitutor,
            converter,
            writer,
            config,
        }
    }

    /// Where the combined image of a run in `scratch_dir` is written.
    pub fn output_path(&self, scratch_dir: &Path) -> PathBuf {
        scratch_dir.join(format!("{}.{}", OUTPUT_STEM, self.config.encode.format.extension()))
    }

    /// Substitutes, rasterizes and decodes a single glyph.
    #[instrument(skip(self, scratch_dir))]
    pub fn render_glyph(&self, scratch_dir: &Path, index: usize, token: &str) -> Result<RasterImage> {
        let names = GlyphFileNames::new(scratch_dir, &self.config.template, index, token);

        let glyph = || -> Result<RasterImage> {
            {
                let _span = tracing::info_span!("substitute_template").entered();
                self.substitutor.substitute(&self.config.template, token, &names.substituted)?;
            }

            {
                let _span = tracing::info_span!("rasterize", height = self.config.height).entered();
                self.converter.convert(&names.substituted, &names.raster, self.config.height)?;
            }

            let _span = tracing::info_span!("decode_raster").entered();
            read_raster(&names.raster)
        };

        glyph().map_err(|e| e.for_glyph(index, token))
    }

    /// Renders every configured glyph in order, stopping at the first failure.
    pub fn render_all(&self, scratch_dir: &Path) -> Result<Vec<RasterImage>> {
        self.config
            .chars
            .iter()
            .enumerate()
            .map(|(index, token)| self.render_glyph(scratch_dir, index, token))
            .collect()
    }

    /// Runs the whole pipeline and returns the path of the combined image.
    ///
    /// Nothing is written to the output path unless every glyph rendered and
    /// the canvas encoded successfully.
    #[instrument(skip(self, scratch_dir), fields(template = %self.config.template.display()))]
    pub fn run(&self, scratch_dir: &Path) -> Result<PathBuf> {
        self.config.validate()?;

        info!(
            glyphs = self.config.chars.len(),
            height = self.config.height,
            scratch = %scratch_dir.display(),
            "Starting glyph strip"
        );

        let images = self.render_all(scratch_dir)?;

        let canvas = {
            let _span = tracing::info_span!("combine").entered();
            combine_horizontally(&images)?
        };

        let mut encoded = Vec::new();
        {
            let _span = tracing::info_span!("encode_canvas").entered();
            self.writer.write_canvas(&canvas, &mut encoded, &self.config.encode)?;
        }

        let output_path = self.output_path(scratch_dir);
        std::fs::write(&output_path, &encoded).map_err(|e| {
            GlyphStripError::Encode(format!("{}: {}", output_path.display(), e))
        })?;

        info!(
            width = canvas.width(),
            height = canvas.height(),
            output = %output_path.display(),
            "Glyph strip complete"
        );
        Ok(output_path)
    }

    pub fn config(&self) -> &GlyphStripConfig {
        &self.config
    }
}
