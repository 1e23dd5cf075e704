use std::fmt::Write as _;
use std::path::{Path, PathBuf};

const DEFAULT_STEM: &str = "template";

/// Scratch file locations for one requested glyph.
///
/// Names are built as `<index>-<template stem>-<token slug>.<ext>`. The index
/// keeps repeated tokens apart and the slug keeps any token path-safe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFileNames {
    pub substituted: PathBuf,
    pub raster: PathBuf,
}

impl GlyphFileNames {
    pub fn new(scratch_dir: &Path, template: &Path, index: usize, token: &str) -> Self {
        let stem = template
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_STEM.to_string());
        let base = format!("{:03}-{}-{}", index, slug(&stem), slug(token));

        Self {
            substituted: scratch_dir.join(format!("{base}.svg")),
            raster: scratch_dir.join(format!("{base}.png")),
        }
    }
}

fn slug(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else {
            let _ = write!(out, "u{:x}", c as u32);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_use_index_stem_and_token() {
        let names = GlyphFileNames::new(Path::new("/tmp/run"), Path::new("fonts/digit.svg"), 2, "C");

        assert_eq!(names.substituted, Path::new("/tmp/run/002-digit-C.svg"));
        assert_eq!(names.raster, Path::new("/tmp/run/002-digit-C.png"));
    }

    #[test]
    fn test_template_path_containing_extension_twice() {
        let names = GlyphFileNames::new(Path::new("out"), Path::new("my.svg.files/a.svg.svg"), 0, "A");

        assert_eq!(names.raster, Path::new("out/000-au2esvg-A.png"));
    }

    #[test]
    fn test_unsafe_tokens_are_encoded() {
        let names = GlyphFileNames::new(Path::new("out"), Path::new("t.svg"), 0, "/");
        assert_eq!(names.raster, Path::new("out/000-t-u2f.png"));

        let names = GlyphFileNames::new(Path::new("out"), Path::new("t.svg"), 1, "é");
        assert_eq!(names.raster, Path::new("out/001-t-ue9.png"));
    }

    #[test]
    fn test_repeated_tokens_do_not_collide() {
        let first = GlyphFileNames::new(Path::new("out"), Path::new("t.svg"), 0, "A");
        let second = GlyphFileNames::new(Path::new("out"), Path::new("t.svg"), 1, "A");

        assert_ne!(first.raster, second.raster);
    }
}
