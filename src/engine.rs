//! PDF engine abstraction layer.
//!
//! Provides a trait-based interface for the operations the document handle
//! needs from a PDF engine, isolating the concrete PDF library from the
//! indexing and iteration logic. Implementations own the parsed document
//! state and are free to back it with any parser.

use thiserror::Error;

use crate::layout::Layout;

/// Failures reported by an engine implementation.
///
/// The document handle maps these onto the public [`crate::Error`] taxonomy;
/// engine implementations never surface their own library's error types.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The byte stream is not a structurally valid PDF document.
    #[error("malformed document: {0}")]
    Malformed(String),

    /// The document is encrypted and the credentials on hand do not open it.
    #[error("document is encrypted")]
    Encrypted,

    /// One page failed to parse while the document as a whole is readable.
    #[error("malformed page: {0}")]
    PageMalformed(String),
}

/// Abstract interface for opening PDF documents.
pub trait Engine {
    /// Parse a document from raw bytes.
    ///
    /// Engines that detect encryption at parse time may fail here with
    /// [`EngineError::Encrypted`]; engines that parse the envelope first
    /// report encryption later, from [`EngineDoc::unlock`].
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn EngineDoc>, EngineError>;
}

/// One opened, engine-parsed document.
///
/// Page numbers at this boundary are 1-based, following PDF convention.
pub trait EngineDoc {
    /// Authenticate `password` against the document's user and owner roles.
    ///
    /// A password valid for either role unlocks full content access. Calling
    /// this on an unencrypted document succeeds without side effects. A
    /// rejected password fails with [`EngineError::Encrypted`]; engines must
    /// not distinguish a wrong password from a missing one.
    fn unlock(&mut self, password: &str) -> Result<(), EngineError>;

    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// Extract the text of one page under the given layout mode.
    fn extract(&self, page_number: u32, layout: Layout) -> Result<String, EngineError>;
}
