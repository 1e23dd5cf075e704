//! Raster conversion types

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Decoded raster image. Every stage after decoding works on RGBA8.
pub type RasterImage = image::RgbaImage;

/// Command-line dialect of the Inkscape export options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFlags {
    /// Inkscape 1.x: `--export-type=png --export-filename=<out>`
    #[default]
    Modern,
    /// Inkscape 0.9x: `--export-png=<out>`
    Legacy,
}

impl ExportFlags {
    pub fn args(&self, source: &Path, destination: &Path, height: u32) -> Vec<OsString> {
        let height = OsString::from(format!("--export-height={height}"));
        match self {
            ExportFlags::Modern => vec![
                source.as_os_str().to_owned(),
                OsString::from("--export-type=png"),
                prefixed("--export-filename=", destination),
                height,
            ],
            ExportFlags::Legacy => vec![
                source.as_os_str().to_owned(),
                prefixed("--export-png=", destination),
                height,
            ],
        }
    }
}

fn prefixed(flag: &str, path: &Path) -> OsString {
    let mut arg = OsString::from(flag);
    arg.push(path.as_os_str());
    arg
}

/// Settings for the external rasterizer process
#[derive(Debug, Clone)]
pub struct RasterizerOptions {
    /// Program to run, looked up on `PATH` when not absolute
    pub program: PathBuf,
    pub export_flags: ExportFlags,
    /// Kill the rasterizer if it runs longer than this. `None` waits forever.
    pub timeout: Option<Duration>,
}

impl Default for RasterizerOptions {
    fn default() -> Self {
        Self {
            program: PathBuf::from("inkscape"),
            export_flags: ExportFlags::Modern,
            timeout: Some(Duration::from_secs(60)),
        }
    }
}
