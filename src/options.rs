//! Loading options and configuration.

/// Options for loading a PDF document.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Password for encrypted documents. A password valid for either the
    /// user or the owner role unlocks the document.
    pub password: Option<String>,

    /// Emit page text in content-stream order.
    pub raw: bool,

    /// Emit page text in visual (coordinate-preserving) order.
    pub physical: bool,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the password to try during unlock.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Request content-stream extraction order.
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    /// Request visual extraction order.
    pub fn physical(mut self) -> Self {
        self.physical = true;
        self
    }
}
