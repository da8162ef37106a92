//! Configuration constants and validation functions for the preprocessor.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PreprocessError, Result};

/// Default input document, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data/raw/SR-741.01-01042025-DE.docx";

/// Default base directory for output files.
pub const DEFAULT_OUTPUT_BASE: &str = "data";

/// Subdirectory for per-law JSON files.
pub const PROCESSED_DIR: &str = "processed";

/// Subdirectory for the bundled dataset consumed by the app.
pub const BUNDLED_DIR: &str = "bundled";

/// Filename of the bundled dataset.
pub const BUNDLED_FILENAME: &str = "laws.json";

/// Maximum length of the first line for it to count as an article title.
pub const MAX_TITLE_LEN: usize = 100;

/// Title words must be strictly longer than this to become keywords.
pub const MIN_KEYWORD_LEN: usize = 3;

/// Maximum length of the slug fragment in a chapter id.
pub const SLUG_MAX_LEN: usize = 50;

/// Articles with less body text than this are flagged as near-empty.
pub const MIN_ARTICLE_TEXT_LEN: usize = 10;

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate date format (YYYY-MM-DD).
///
/// # Examples
/// ```
/// use verkehrsrecht_preprocessor::config::validate_date;
///
/// assert!(validate_date("2025-04-01").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("2025-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(PreprocessError::InvalidDate(date_str.to_string()));
    }

    // Parse and validate it's a real date
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| PreprocessError::InvalidDate(date_str.to_string()))?;

    Ok(())
}
