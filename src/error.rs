//! Error types for the preprocessor.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the preprocessor library.
#[derive(Debug, Error)]
pub enum PreprocessError {
    /// Source document is missing. This is fatal: no partial output is written.
    #[error("Input document not found: {}. Place the source document there or pass --input", .path.display())]
    InputNotFound { path: PathBuf },

    /// Invalid date format.
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD (e.g., 2025-04-01)")]
    InvalidDate(String),

    /// The .docx container could not be read.
    #[error("Failed to read document container: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for preprocessor operations.
pub type Result<T> = std::result::Result<T, PreprocessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_not_found_display() {
        let err = PreprocessError::InputNotFound {
            path: PathBuf::from("data/raw/missing.docx"),
        };
        assert!(err.to_string().contains("missing.docx"));
        assert!(err.to_string().contains("--input"));
    }

    #[test]
    fn test_invalid_date_display() {
        let err = PreprocessError::InvalidDate("2025-13-40".to_string());
        assert!(err.to_string().contains("2025-13-40"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
