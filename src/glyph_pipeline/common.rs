//! Common utilities module
//!
//! This module contains the error type shared by every stage of the glyph pipeline.

pub mod error;

pub use error::{GlyphStripError, Result};
