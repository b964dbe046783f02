//! Text-layout mode selection.
//!
//! The public loading surface takes two independent boolean flags, matching
//! the traditional pdftotext-style interface. They collapse into a single
//! enumerated mode here, before anything reaches the engine.

use crate::error::{Error, Result};

/// Ordering strategy for extracted page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Logical reading order.
    #[default]
    Default,
    /// Content-stream emission order.
    Raw,
    /// Visual, coordinate-preserving order.
    Physical,
}

impl Layout {
    /// Resolve the `raw`/`physical` flag pair into exactly one mode.
    ///
    /// Both flags set is a configuration error; nothing is extracted under
    /// an unresolved mode.
    pub fn resolve(raw: bool, physical: bool) -> Result<Layout> {
        match (raw, physical) {
            (false, false) => Ok(Layout::Default),
            (true, false) => Ok(Layout::Raw),
            (false, true) => Ok(Layout::Physical),
            (true, true) => Err(Error::LayoutConflict),
        }
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Layout::Default => write!(f, "default"),
            Layout::Raw => write!(f, "raw"),
            Layout::Physical => write!(f, "physical"),
        }
    }
}
