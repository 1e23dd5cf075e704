//! glyph-strip CLI
//!
//! Renders one template per character through Inkscape and writes the glyphs
//! side by side into a single image. Prints the image path to stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tempfile::TempDir;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use glyph_strip_rs::glyph_pipeline::{
    config::{DEFAULT_CHARS, DEFAULT_HEIGHT, DEFAULT_TEMPLATE},
    parse_char_list, EncodeOptions, ExportFlags, GlyphStripConfig, OutputFormat, Placeholder,
    PngCompression, RasterizerOptions, SvgToStripPipeline, TiffCompression,
};
use glyph_strip_rs::logger;

#[derive(Parser)]
#[command(name = "glyph-strip")]
#[command(about = "Render a glyph per character from one SVG template and join them into a strip")]
struct Cli {
    /// Filename to use as a template
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Height of every rendered glyph in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Comma separated list of characters to generate
    #[arg(long, default_value = DEFAULT_CHARS)]
    chars: String,

    /// Text of the <tspan> in the template that gets replaced
    #[arg(long, default_value = "A")]
    placeholder: String,

    /// Format of the combined image
    #[arg(long, value_enum, default_value_t = FormatArg::Png)]
    format: FormatArg,

    /// Compression effort for PNG output
    #[arg(long, value_enum, default_value_t = PngCompressionArg::Default)]
    png_compression: PngCompressionArg,

    /// Compression for TIFF output
    #[arg(long, value_enum, default_value_t = TiffCompressionArg::Deflate)]
    tiff_compression: TiffCompressionArg,

    /// Apply horizontal differencing before TIFF compression
    #[arg(long)]
    tiff_predictor: bool,

    /// Inkscape executable
    #[arg(long, default_value = "inkscape")]
    inkscape: PathBuf,

    /// Export option style understood by the installed Inkscape
    #[arg(long, value_enum, default_value_t = ExportFlagsArg::Modern)]
    export_flags: ExportFlagsArg,

    /// Seconds to wait for one Inkscape run, 0 waits forever
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// Directory for intermediate files and the result, instead of a new temporary one
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Log debug output unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Png,
    Tiff,
}

#[derive(Clone, Copy, ValueEnum)]
enum PngCompressionArg {
    Fast,
    Default,
    Best,
}

#[derive(Clone, Copy, ValueEnum)]
enum TiffCompressionArg {
    None,
    Lzw,
    Deflate,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFlagsArg {
    /// Inkscape 1.x
    Modern,
    /// Inkscape 0.9x
    Legacy,
}

impl Cli {
    fn config(&self) -> GlyphStripConfig {
        let format = match self.format {
            FormatArg::Png => OutputFormat::Png,
            FormatArg::Tiff => OutputFormat::Tiff,
        };
        let export_flags = match self.export_flags {
            ExportFlagsArg::Modern => ExportFlags::Modern,
            ExportFlagsArg::Legacy => ExportFlags::Legacy,
        };
        let png_compression = match self.png_compression {
            PngCompressionArg::Fast => PngCompression::Fast,
            PngCompressionArg::Default => PngCompression::Default,
            PngCompressionArg::Best => PngCompression::Best,
        };
        let tiff_compression = match self.tiff_compression {
            TiffCompressionArg::None => TiffCompression::None,
            TiffCompressionArg::Lzw => TiffCompression::Lzw,
            TiffCompressionArg::Deflate => TiffCompression::Deflate,
        };

        GlyphStripConfig::builder()
            .template(self.template.clone())
            .height(self.height)
            .chars(parse_char_list(&self.chars))
            .placeholder(Placeholder::tspan(self.placeholder.clone()))
            .rasterizer(RasterizerOptions {
                program: self.inkscape.clone(),
                export_flags,
                timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            })
            .encode(EncodeOptions {
                format,
                png_compression,
                tiff_compression,
                tiff_predictor: self.tiff_predictor,
            })
            .build()
    }
}

/// Where a run writes its intermediate files and result.
enum ScratchDir {
    /// Removed on drop unless the run succeeds.
    Temporary(TempDir),
    Existing(PathBuf),
}

impl ScratchDir {
    fn create(output_dir: Option<&Path>, temp_root: &Path) -> anyhow::Result<Self> {
        match output_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Unable to create output dir {}", dir.display()))?;
                Ok(Self::Existing(dir.to_path_buf()))
            }
            None => {
                let dir = tempfile::Builder::new()
                    .prefix("svgdigits")
                    .tempdir_in(temp_root)
                    .context("Unable to create temporary dir")?;
                Ok(Self::Temporary(dir))
            }
        }
    }

    fn path(&self) -> &Path {
        match self {
            Self::Temporary(dir) => dir.path(),
            Self::Existing(dir) => dir,
        }
    }

    /// Keeps the directory on disk past the end of the process.
    fn persist(self) -> PathBuf {
        match self {
            Self::Temporary(dir) => dir.keep(),
            Self::Existing(dir) => dir,
        }
    }
}

fn run(cli: &Cli, temp_root: &Path) -> anyhow::Result<PathBuf> {
    let config = cli.config();
    config.validate()?;
    info!(template = %config.template.display(), "Converting template");

    let pipeline = SvgToStripPipeline::new(config)?;
    let scratch = ScratchDir::create(cli.output_dir.as_deref(), temp_root)?;
    info!(dir = %scratch.path().display(), "Output to folder");

    let output = pipeline.run(scratch.path())?;
    scratch.persist();
    Ok(output)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO });

    match run(&cli, &std::env::temp_dir()) {
        Ok(output) => {
            println!("Output in {}", output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Unable to create image: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
