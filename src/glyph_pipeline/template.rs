//! Template substitution module
//!
//! This module turns one SVG template into a per-character copy and decides
//! where every per-character artifact lives in the scratch directory.

mod substitutor;
mod placeholder_substitutor;
mod naming;
pub mod types;

pub use substitutor::TemplateSubstitutor;
pub use placeholder_substitutor::PlaceholderSubstitutor;
pub use naming::GlyphFileNames;
pub use types::Placeholder;
