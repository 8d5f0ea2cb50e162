use thiserror::Error;

/// Error types for signature extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse plist XML: {message}")]
    PlistParse { message: String },

    #[error("Signature structure too deep: match nesting exceeds {limit} levels")]
    StructureTooDeep { limit: usize },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, ExtractError>;

impl ExtractError {
    pub fn plist_parse<S: Into<String>>(message: S) -> Self {
        Self::PlistParse { message: message.into() }
    }

    pub fn structure_too_deep(limit: usize) -> Self {
        Self::StructureTooDeep { limit }
    }

    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Returns true if the error means the signature source is unusable but
    /// the host is otherwise fine, so callers may surface an empty row set.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Io(_) | Self::PlistParse { .. })
    }
}
