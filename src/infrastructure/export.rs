use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{StoreError, StoreResult};

/// File name for a downloaded blueprint: `<name>.json`, with path
/// separators replaced so the file always lands in the download directory.
pub fn blueprint_filename(name: &str) -> String {
    let name = name.trim();
    let stem = if name.is_empty() { "automation" } else { name };
    let stem: String = stem
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '-' } else { c })
        .collect();
    format!("{}.json", stem)
}

pub fn download_blueprint(dir: &Path, name: &str, blueprint: &str) -> StoreResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(blueprint_filename(name));
    fs::write(&path, blueprint)?;
    tracing::info!(path = %path.display(), bytes = blueprint.len(), "blueprint downloaded");
    Ok(path)
}

pub fn copy_to_clipboard(text: &str) -> StoreResult<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| StoreError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| StoreError::Clipboard(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_blueprint_filename() {
        assert_eq!(blueprint_filename("Lead Nurturing"), "Lead Nurturing.json");
        assert_eq!(blueprint_filename("  "), "automation.json");
        assert_eq!(blueprint_filename("sales/weekly"), "sales-weekly.json");
    }

    #[test]
    fn test_download_writes_blueprint() {
        let dir = tempdir().unwrap();
        let path = download_blueprint(dir.path(), "Welcome", "{\n  \"flow\": []\n}").unwrap();
        assert_eq!(path, dir.path().join("Welcome.json"));
        assert_eq!(fs::read_to_string(path).unwrap(), "{\n  \"flow\": []\n}");
    }
}
