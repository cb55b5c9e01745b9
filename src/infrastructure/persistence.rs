//! Local persistent key/value storage and the records kept in it.
//!
//! The store is a flat JSON object of string keys to string values, written
//! through to disk on every `set`. Structured values (the saved automation
//! list) are stored as JSON text under their key.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{SavedAutomation, StoreResult};

pub const KEY_API_KEY: &str = "geminiApiKey";
pub const KEY_DARK_MODE: &str = "darkMode";
pub const KEY_LANGUAGE: &str = "language";
pub const KEY_NOTIFICATIONS: &str = "notifications";
pub const KEY_PROFILE_NAME: &str = "profileName";
pub const KEY_AUTOMATIONS: &str = "automations";

#[derive(Debug)]
pub struct LocalStore {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl LocalStore {
    /// Opens the store at `path`. A missing file is an empty store.
    ///
    /// A malformed file is moved aside to `<path>.corrupt` and the store
    /// starts empty, so the app still starts and later writes never replace
    /// the unreadable data. If it cannot be moved, the store stays in memory
    /// for this session.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self { path: Some(path), entries: BTreeMap::new() },
        };
        match serde_json::from_str(&content) {
            Ok(entries) => Self { path: Some(path), entries },
            Err(e) => {
                let backup = corrupt_path(&path);
                tracing::warn!(path = %path.display(), error = %e, "malformed store file");
                match fs::rename(&path, &backup) {
                    Ok(()) => {
                        tracing::warn!(backup = %backup.display(), "malformed store file moved aside");
                        Self { path: Some(path), entries: BTreeMap::new() }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "could not move malformed store file, keeping changes in memory");
                        Self::in_memory()
                    }
                }
            }
        }
    }

    /// A store that never touches the disk.
    pub fn in_memory() -> Self {
        Self { path: None, entries: BTreeMap::new() }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn flush(&self) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(path, json)?;
        Ok(())
    }
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".corrupt");
    path.with_file_name(name)
}

pub const LANGUAGES: [(&str, &str); 5] = [
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("hi", "Hindi"),
];

/// User preferences kept in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub profile_name: String,
    pub api_key: String,
    pub dark_mode: bool,
    pub language: String,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile_name: String::new(),
            api_key: String::new(),
            dark_mode: false,
            language: "en".to_string(),
            notifications: true,
        }
    }
}

impl Settings {
    pub fn load(store: &LocalStore) -> Self {
        Self {
            profile_name: store.get(KEY_PROFILE_NAME).unwrap_or_default().to_string(),
            api_key: store.get(KEY_API_KEY).unwrap_or_default().to_string(),
            dark_mode: store.get(KEY_DARK_MODE) == Some("true"),
            language: store.get(KEY_LANGUAGE).unwrap_or("en").to_string(),
            notifications: store.get(KEY_NOTIFICATIONS) != Some("false"),
        }
    }

    /// Writes the explicitly saved fields. Dark mode has its own immediate
    /// writer.
    pub fn save(&self, store: &mut LocalStore) -> StoreResult<()> {
        store.set(KEY_API_KEY, &self.api_key)?;
        store.set(KEY_LANGUAGE, &self.language)?;
        store.set(KEY_NOTIFICATIONS, &self.notifications.to_string())?;
        store.set(KEY_PROFILE_NAME, &self.profile_name)?;
        Ok(())
    }

    pub fn save_dark_mode(&self, store: &mut LocalStore) -> StoreResult<()> {
        store.set(KEY_DARK_MODE, &self.dark_mode.to_string())
    }

    pub fn language_label(&self) -> &str {
        LANGUAGES
            .iter()
            .find(|(code, _)| *code == self.language)
            .map(|(_, label)| *label)
            .unwrap_or(self.language.as_str())
    }

    pub fn cycle_language(&mut self) {
        let index = LANGUAGES.iter().position(|(code, _)| *code == self.language);
        let next = index.map(|i| (i + 1) % LANGUAGES.len()).unwrap_or(0);
        self.language = LANGUAGES[next].0.to_string();
    }
}

/// Append-only list of saved automations.
pub struct AutomationRepository;

impl AutomationRepository {
    /// Saved records for display. An unreadable list shows as empty; it is
    /// left untouched in the store.
    pub fn list(store: &LocalStore) -> Vec<SavedAutomation> {
        let Some(raw) = store.get(KEY_AUTOMATIONS) else {
            return Vec::new();
        };
        serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "saved automations unreadable");
            Vec::new()
        })
    }

    /// Appends one record, keeping every earlier record as it was. Returns
    /// the new count.
    ///
    /// # Errors
    ///
    /// Fails without writing anything when the stored list cannot be read,
    /// so earlier records are never replaced.
    pub fn append(store: &mut LocalStore, record: SavedAutomation) -> StoreResult<usize> {
        let mut records: Vec<SavedAutomation> = match store.get(KEY_AUTOMATIONS) {
            Some(raw) => serde_json::from_str(raw)?,
            None => Vec::new(),
        };
        records.push(record);
        let json = serde_json::to_string(&records)?;
        store.set(KEY_AUTOMATIONS, &json)?;
        tracing::info!(count = records.len(), "automation saved");
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreError;
    use tempfile::tempdir;

    fn record(name: &str) -> SavedAutomation {
        SavedAutomation {
            name: name.to_string(),
            description: format!("{} description", name),
            trigger: "webhook".to_string(),
            actions: vec!["gmail".to_string(), "hubspot".to_string()],
            blueprint: "{\n  \"flow\": []\n}".to_string(),
            created: "2024-05-01T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_store_writes_through_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = LocalStore::open(&path);
        assert_eq!(store.get("language"), None);
        store.set("language", "fr").unwrap();

        let reopened = LocalStore::open(&path);
        assert_eq!(reopened.get("language"), Some("fr"));
    }

    #[test]
    fn test_malformed_store_file_is_kept_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let mut store = LocalStore::open(&path);
        assert_eq!(store.get(KEY_API_KEY), None);
        store.set(KEY_LANGUAGE, "fr").unwrap();

        let backup = dir.path().join("storage.json.corrupt");
        assert_eq!(fs::read_to_string(backup).unwrap(), "not json");
        assert_eq!(LocalStore::open(&path).get(KEY_LANGUAGE), Some("fr"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::load(&LocalStore::in_memory());
        assert_eq!(settings, Settings::default());
        assert!(settings.notifications);
        assert_eq!(settings.language_label(), "English");
    }

    #[test]
    fn test_settings_round_trip() {
        let mut store = LocalStore::in_memory();
        let settings = Settings {
            profile_name: "Dana".to_string(),
            api_key: "AIza-test".to_string(),
            dark_mode: true,
            language: "de".to_string(),
            notifications: false,
        };
        settings.save(&mut store).unwrap();
        settings.save_dark_mode(&mut store).unwrap();

        assert_eq!(store.get(KEY_NOTIFICATIONS), Some("false"));
        assert_eq!(store.get(KEY_DARK_MODE), Some("true"));
        assert_eq!(Settings::load(&store), settings);
    }

    #[test]
    fn test_save_leaves_dark_mode_alone() {
        let mut store = LocalStore::in_memory();
        let settings = Settings { dark_mode: true, ..Default::default() };
        settings.save(&mut store).unwrap();
        assert_eq!(store.get(KEY_DARK_MODE), None);
    }

    #[test]
    fn test_cycle_language_wraps() {
        let mut settings = Settings { language: "hi".to_string(), ..Default::default() };
        settings.cycle_language();
        assert_eq!(settings.language, "en");
        settings.language = "xx".to_string();
        settings.cycle_language();
        assert_eq!(settings.language, "en");
    }

    #[test]
    fn test_append_preserves_previous_records() {
        let mut store = LocalStore::in_memory();
        assert!(AutomationRepository::list(&store).is_empty());

        assert_eq!(AutomationRepository::append(&mut store, record("first")).unwrap(), 1);
        assert_eq!(AutomationRepository::append(&mut store, record("second")).unwrap(), 2);
        // Same content again is still a new record.
        assert_eq!(AutomationRepository::append(&mut store, record("first")).unwrap(), 3);

        let saved = AutomationRepository::list(&store);
        assert_eq!(saved, vec![record("first"), record("second"), record("first")]);
    }

    #[test]
    fn test_append_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let mut store = LocalStore::open(&path);
        AutomationRepository::append(&mut store, record("persisted")).unwrap();

        let reopened = LocalStore::open(&path);
        assert_eq!(AutomationRepository::list(&reopened), vec![record("persisted")]);
    }

    #[test]
    fn test_append_refuses_unreadable_list() {
        let mut store = LocalStore::in_memory();
        let stored = r#"[{"name":"old","description":"d","trigger":"webhook","actions":[],"blueprint":"{}"}]"#;
        store.set(KEY_AUTOMATIONS, stored).unwrap();

        let result = AutomationRepository::append(&mut store, record("new"));
        assert!(matches!(result, Err(StoreError::Serialize(_))));
        assert_eq!(store.get(KEY_AUTOMATIONS), Some(stored));
        assert!(AutomationRepository::list(&store).is_empty());
    }
}
