//! The document handle: loading, page access, and iteration.

use std::io::Read;

use crate::backend::LopdfBackend;
use crate::engine::{Engine, EngineDoc, EngineError};
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::options::LoadOptions;

/// One PDF document opened for text extraction.
///
/// A `Pdf` owns at most one engine handle at a time. Pages are addressed by
/// 0-based index with negative indices counting from the end, and the whole
/// document can be walked with the [`Iterator`] implementation. Page text is
/// extracted on demand and never cached; two reads of the same index invoke
/// the engine twice.
///
/// # Example
///
/// ```no_run
/// use pdftext::Pdf;
///
/// fn main() -> pdftext::Result<()> {
///     let bytes = std::fs::read("document.pdf")?;
///     let mut pdf = Pdf::new(&bytes)?;
///     println!("{} pages", pdf.page_count());
///     for page in &mut pdf {
///         println!("{}", page?);
///     }
///     Ok(())
/// }
/// ```
pub struct Pdf {
    engine: Box<dyn Engine>,
    doc: Option<Box<dyn EngineDoc>>,
    page_count: usize,
    layout: Layout,
    cursor: usize,
}

impl Pdf {
    /// Load a document from raw bytes using the default lopdf backend.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        Self::with_options(bytes, &LoadOptions::default())
    }

    /// Load a document from raw bytes with a password and layout flags.
    pub fn with_options(bytes: &[u8], options: &LoadOptions) -> Result<Self> {
        let mut pdf = Self::with_engine(Box::new(LopdfBackend::new()));
        pdf.load(bytes, options)?;
        Ok(pdf)
    }

    /// Load a document from any byte reader.
    pub fn from_reader<R: Read>(mut reader: R, options: &LoadOptions) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::with_options(&bytes, options)
    }

    /// Create an empty handle over a custom engine.
    ///
    /// The handle starts with no document loaded: `page_count` is 0, every
    /// read fails with [`Error::NoDocument`], and iteration yields nothing.
    /// Call [`load`](Self::load) to open a document through the engine.
    pub fn with_engine(engine: Box<dyn Engine>) -> Self {
        Self {
            engine,
            doc: None,
            page_count: 0,
            layout: Layout::Default,
            cursor: 0,
        }
    }

    /// Load (or re-load) a document from raw bytes.
    ///
    /// Any previously held document is released first, whether or not the
    /// new load succeeds: after a failed `load` the handle is empty, not
    /// reverted to the prior document. On success the iteration cursor is
    /// back at page 0 and the resolved layout mode applies to every
    /// extraction until the next load.
    pub fn load(&mut self, bytes: &[u8], options: &LoadOptions) -> Result<()> {
        self.clear();

        let layout = Layout::resolve(options.raw, options.physical)?;

        let mut doc = self.engine.open(bytes).map_err(map_open_error)?;

        // Always negotiate the unlock, with "" standing in for no password.
        // Unencrypted documents pass through; encrypted ones authenticate
        // the password against both credential roles.
        let password = options.password.as_deref().unwrap_or("");
        doc.unlock(password).map_err(|_| Error::Encrypted)?;

        self.page_count = doc.page_count();
        self.doc = Some(doc);
        self.layout = layout;
        log::debug!(
            "loaded document: {} pages, {} layout",
            self.page_count,
            self.layout
        );
        Ok(())
    }

    fn clear(&mut self) {
        self.doc = None;
        self.page_count = 0;
        self.layout = Layout::Default;
        self.cursor = 0;
    }

    /// Number of pages, or 0 when no document is loaded.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// The layout mode resolved at load time.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Extract the text of one page.
    ///
    /// `index` is 0-based; negative indices count from the end, so `-1` is
    /// the last page. Out-of-range indices fail with
    /// [`Error::PageOutOfRange`]. Index access never moves the iteration
    /// cursor, so it can be freely interleaved with iteration.
    pub fn get_text(&self, index: isize) -> Result<String> {
        let doc = self.doc.as_ref().ok_or(Error::NoDocument)?;
        let page_number = self.resolve_index(index)?;
        doc.extract(page_number, self.layout)
            .map_err(|e| map_extract_error(page_number, e))
    }

    /// Extract the whole document as one string.
    ///
    /// Pages are joined in order with a blank line between them. The first
    /// page-level failure aborts the read; no partial text is returned.
    pub fn read_all(&self) -> Result<String> {
        if self.doc.is_none() {
            return Err(Error::NoDocument);
        }
        let mut out = String::new();
        for index in 0..self.page_count {
            if index > 0 {
                out.push_str("\n\n");
            }
            out.push_str(&self.get_text(index as isize)?);
        }
        Ok(out)
    }

    /// Map a user-facing index onto a 1-based engine page number.
    fn resolve_index(&self, index: isize) -> Result<u32> {
        let count = self.page_count as isize;
        let resolved = if index < 0 { index + count } else { index };
        if resolved < 0 || resolved >= count {
            return Err(Error::PageOutOfRange(index, self.page_count));
        }
        Ok(resolved as u32 + 1)
    }
}

/// Lazy page-by-page traversal.
///
/// Each successful [`load`](Pdf::load) restarts the sequence at page 0. A
/// page that fails to parse is yielded as `Some(Err(Error::Page(..)))` and
/// the cursor still advances; exhaustion is `None`, repeatedly.
impl Iterator for Pdf {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.doc.is_none() || self.cursor >= self.page_count {
            return None;
        }
        let page_number = self.cursor as u32 + 1;
        self.cursor += 1;
        let doc = self.doc.as_ref()?;
        Some(
            doc.extract(page_number, self.layout)
                .map_err(|e| map_extract_error(page_number, e)),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.page_count.saturating_sub(self.cursor);
        (remaining, Some(remaining))
    }
}

fn map_open_error(e: EngineError) -> Error {
    match e {
        EngineError::Encrypted => Error::Encrypted,
        EngineError::Malformed(msg) | EngineError::PageMalformed(msg) => Error::Parse(msg),
    }
}

fn map_extract_error(page_number: u32, e: EngineError) -> Error {
    match e {
        EngineError::Encrypted => Error::Encrypted,
        EngineError::Malformed(msg) | EngineError::PageMalformed(msg) => {
            Error::Page(page_number, msg)
        }
    }
}
