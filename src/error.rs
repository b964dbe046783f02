//! Error types for the pdftext library.

use std::io;
use thiserror::Error;

/// Result type alias for pdftext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a document or extracting text.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading from a file or reader.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Both `raw` and `physical` layout flags were requested.
    #[error("raw and physical layout modes are mutually exclusive")]
    LayoutConflict,

    /// The document requires a password and none was given, or the given
    /// password is wrong. The two cases are deliberately indistinguishable.
    #[error("document is encrypted and the password is missing or incorrect")]
    Encrypted,

    /// Document-level structural corruption, unrelated to encryption.
    #[error("PDF parsing error: {0}")]
    Parse(String),

    /// A specific page's content is malformed. The rest of the document
    /// remains readable. The page number is 1-based.
    #[error("page {0} is malformed: {1}")]
    Page(u32, String),

    /// A read was attempted on a handle with no successfully loaded document.
    #[error("no document is loaded")]
    NoDocument,

    /// Page index out of range after negative-index normalization. Carries
    /// the requested index and the document's page count.
    #[error("page index {0} out of range (document has {1} pages)")]
    PageOutOfRange(isize, usize),
}
