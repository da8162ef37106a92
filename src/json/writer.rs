//! JSON writer for law files and the bundled dataset.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{BUNDLED_DIR, BUNDLED_FILENAME, DEFAULT_OUTPUT_BASE, PROCESSED_DIR};
use crate::error::Result;
use crate::types::{Dataset, Law};

/// Serialize a value as pretty-printed (2-space) JSON with a trailing
/// newline, the format the consuming app's bundled assets use.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Save a single law record to `<base>/processed/<stem>.json`.
///
/// # Returns
/// Path to the saved file
pub fn save_law(law: &Law, file_stem: &str, output_base: Option<&Path>) -> Result<PathBuf> {
    let base = output_base.unwrap_or(Path::new(DEFAULT_OUTPUT_BASE));
    let path = base.join(PROCESSED_DIR).join(format!("{file_stem}.json"));

    write_json_atomic(&path, &to_pretty_json(law)?)?;
    Ok(path)
}

/// Save the bundled dataset to `<base>/bundled/laws.json`, the only
/// file the app reads at runtime for legal-article content.
///
/// # Returns
/// Path to the saved file
pub fn save_dataset(dataset: &Dataset, output_base: Option<&Path>) -> Result<PathBuf> {
    let base = output_base.unwrap_or(Path::new(DEFAULT_OUTPUT_BASE));
    let path = base.join(BUNDLED_DIR).join(BUNDLED_FILENAME);

    write_json_atomic(&path, &to_pretty_json(dataset)?)?;
    Ok(path)
}

/// Write content to a file atomically: temp file in the same directory,
/// sync to disk, then rename. Creates missing parent directories and
/// overwrites existing files idempotently.
fn write_json_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "out.json".to_string());
    let temp_path = dir.join(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(&temp_path, path)?;
    Ok(())
}
