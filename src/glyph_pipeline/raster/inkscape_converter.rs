//! Raster converter that shells out to Inkscape.

use std::fs::File;
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tracing::{debug, instrument, warn};

use crate::glyph_pipeline::common::error::{GlyphStripError, Result};
use crate::glyph_pipeline::raster::converter::RasterConverter;
use crate::glyph_pipeline::raster::types::RasterizerOptions;

/// How often a running rasterizer is checked against its timeout.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs the configured Inkscape binary once per glyph.
///
/// Combined stdout and stderr of each run is written next to the destination
/// with a `.log` extension and attached to the error when the run fails.
#[derive(Debug, Clone, Default)]
pub struct InkscapeConverter {
    options: RasterizerOptions,
}

impl InkscapeConverter {
    pub fn new(options: RasterizerOptions) -> Self {
        Self { options }
    }

    fn spawn(&self, source: &Path, destination: &Path, height: u32, log: &Path) -> Result<Child> {
        let args = self.options.export_flags.args(source, destination, height);

        let stdout = File::create(log).map_err(|e| {
            GlyphStripError::Conversion(format!("{}: {}", log.display(), e))
        })?;
        let stderr = stdout.try_clone().map_err(|e| {
            GlyphStripError::Conversion(format!("{}: {}", log.display(), e))
        })?;

        debug!(program = %self.options.program.display(), ?args, "Spawning rasterizer");

        Command::new(&self.options.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout))
            .stderr(Stdio::from(stderr))
            .spawn()
            .map_err(|e| {
                GlyphStripError::Conversion(format!(
                    "failed to start {}: {} (args: {:?})",
                    self.options.program.display(),
                    e,
                    args
                ))
            })
    }

    fn wait(&self, child: &mut Child) -> Result<ExitStatus> {
        let wait_error = |e: std::io::Error| {
            GlyphStripError::Conversion(format!(
                "failed to wait for {}: {}",
                self.options.program.display(),
                e
            ))
        };

        let Some(timeout) = self.options.timeout else {
            return child.wait().map_err(wait_error);
        };

        let started = Instant::now();
        loop {
            if let Some(status) = child.try_wait().map_err(wait_error)? {
                return Ok(status);
            }
            if started.elapsed() >= timeout {
                warn!(?timeout, "Rasterizer timed out, killing it");
                // The child may exit between try_wait and kill.
                let _ = child.kill();
                let _ = child.wait();
                return Err(GlyphStripError::ConversionTimeout {
                    program: self.options.program.display().to_string(),
                    timeout,
                });
            }
            std::thread::sleep(POLL_INTERVAL);
        }
    }
}

impl RasterConverter for InkscapeConverter {
    #[instrument(skip(self), fields(program = %self.options.program.display()))]
    fn convert(&self, source: &Path, destination: &Path, height: u32) -> Result<()> {
        let log = destination.with_extension("log");
        remove_stale(destination)?;

        let mut child = self.spawn(source, destination, height, &log)?;
        let status = self.wait(&mut child)?;
        let diagnostics = read_diagnostics(&log);

        if !status.success() {
            let args = self.options.export_flags.args(source, destination, height);
            return Err(GlyphStripError::Conversion(format!(
                "failed args: {:?}, {}, {}",
                args,
                status,
                diagnostics.trim()
            )));
        }

        if !destination.is_file() {
            return Err(GlyphStripError::Conversion(format!(
                "{} exited successfully but wrote no image to {}: {}",
                self.options.program.display(),
                destination.display(),
                diagnostics.trim()
            )));
        }

        debug!("Rasterizer finished");
        Ok(())
    }
}

/// A leftover raster from an earlier run must not pass for this run's output.
fn remove_stale(destination: &Path) -> Result<()> {
    match std::fs::remove_file(destination) {
        Ok(()) => {
            debug!(path = %destination.display(), "Removed stale raster");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(GlyphStripError::Conversion(format!(
            "{}: {}",
            destination.display(),
            e
        ))),
    }
}

fn read_diagnostics(log: &Path) -> String {
    match std::fs::read(log) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => format!("<no diagnostics: {e}>"),
    }
}
