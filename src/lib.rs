//! # pdftext
//!
//! Page-by-page PDF text extraction for Rust.
//!
//! This library opens PDF documents from bytes, a reader, or a file path and
//! extracts their text one page at a time. Pages are addressed like a
//! sequence: 0-based indices, negative indices counting from the end, and
//! lazy iteration over the whole document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdftext::Pdf;
//!
//! fn main() -> pdftext::Result<()> {
//!     let bytes = std::fs::read("document.pdf")?;
//!     let mut pdf = Pdf::new(&bytes)?;
//!
//!     println!("Pages: {}", pdf.page_count());
//!     println!("First page: {}", pdf.get_text(0)?);
//!     println!("Last page: {}", pdf.get_text(-1)?);
//!
//!     for page in &mut pdf {
//!         println!("{}", page?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Sequence-style access**: index pages from either end, or iterate
//! - **Password unlock**: either the user or the owner password opens an
//!   encrypted document
//! - **Layout modes**: reading order, raw content-stream order, or physical
//!   (visual) order, chosen once at load time
//! - **Pluggable engine**: the PDF parser sits behind a small trait; the
//!   bundled backend uses lopdf

pub mod backend;
pub mod document;
pub mod engine;
pub mod error;
pub mod layout;
pub mod options;

// Re-export commonly used types
pub use backend::LopdfBackend;
pub use document::Pdf;
pub use engine::{Engine, EngineDoc, EngineError};
pub use error::{Error, Result};
pub use layout::Layout;
pub use options::LoadOptions;

use std::path::Path;

/// Extract the text of an entire document from raw bytes.
///
/// Pages are joined with a blank line, as in [`Pdf::read_all`].
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("document.pdf").unwrap();
/// let text = pdftext::extract_bytes(&data).unwrap();
/// println!("{}", text);
/// ```
pub fn extract_bytes(data: &[u8]) -> Result<String> {
    Pdf::new(data)?.read_all()
}

/// Extract the text of an entire document from raw bytes, with options.
pub fn extract_bytes_with_options(data: &[u8], options: &LoadOptions) -> Result<String> {
    Pdf::with_options(data, options)?.read_all()
}

/// Extract the text of an entire document from a file on disk.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<String> {
    extract_file_with_options(path, &LoadOptions::default())
}

/// Extract the text of an entire document from a file on disk, with options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &LoadOptions,
) -> Result<String> {
    let data = std::fs::read(path)?;
    extract_bytes_with_options(&data, options)
}
