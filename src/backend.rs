//! Default engine adapter backed by lopdf.

use lopdf::Document as LopdfDocument;

use crate::engine::{Engine, EngineDoc, EngineError};
use crate::layout::Layout;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Engine implementation over [`lopdf`].
///
/// This is the engine used by [`crate::Pdf::new`] when no custom engine is
/// supplied. lopdf emits page text in content-stream order and has no layout
/// reconstruction pass, so all three layout modes yield the same ordering
/// here; mode fidelity is a property of the engine, not of the document
/// handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    /// Create a new backend instance.
    pub fn new() -> Self {
        Self
    }
}

impl Engine for LopdfBackend {
    fn open(&self, bytes: &[u8]) -> Result<Box<dyn EngineDoc>, EngineError> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(EngineError::Malformed(
                "missing %PDF header, not a PDF document".to_string(),
            ));
        }

        let doc = LopdfDocument::load_mem(bytes).map_err(|e| match e {
            lopdf::Error::Decryption(_) => EngineError::Encrypted,
            other => EngineError::Malformed(other.to_string()),
        })?;

        log::debug!("opened document, version {}", doc.version);
        Ok(Box::new(LopdfDoc { doc }))
    }
}

/// One document parsed by lopdf.
struct LopdfDoc {
    doc: LopdfDocument,
}

impl EngineDoc for LopdfDoc {
    fn unlock(&mut self, password: &str) -> Result<(), EngineError> {
        if !self.doc.is_encrypted() {
            return Ok(());
        }
        // lopdf tries the password against both credential roles; any
        // rejection collapses to the same error.
        self.doc.decrypt(password).map_err(|e| {
            log::debug!("decryption failed: {}", e);
            EngineError::Encrypted
        })
    }

    fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    fn extract(&self, page_number: u32, layout: Layout) -> Result<String, EngineError> {
        log::trace!("extracting page {} ({} layout)", page_number, layout);
        self.doc
            .extract_text(&[page_number])
            .map_err(|e| EngineError::PageMalformed(e.to_string()))
    }
}
