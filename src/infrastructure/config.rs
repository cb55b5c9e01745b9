//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_LOG_FILTER: &str = "autoflow=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Used only when the settings store holds no key.
    pub fallback_api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `GEMINI_API_KEY`: key used when none is saved in Settings
    /// - `GEMINI_MODEL`: default `gemini-2.0-flash`
    /// - `GEMINI_BASE_URL`: default Google generative-language models URL
    /// - `AUTOFLOW_DATA_DIR`: default per-user data directory
    /// - `AUTOFLOW_LOG`: tracing filter, default `autoflow=info`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let base_url = non_empty("GEMINI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let data_dir = non_empty("AUTOFLOW_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        Self {
            fallback_api_key: non_empty("GEMINI_API_KEY"),
            model: non_empty("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            base_url,
            data_dir,
            log_filter: non_empty("AUTOFLOW_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// `{base}/{model}:generateContent`, without the key.
    pub fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.base_url, self.model)
    }

    /// Picks the saved key over the environment fallback. Blank keys count
    /// as absent.
    pub fn resolve_api_key(&self, saved: &str) -> Option<String> {
        let saved = saved.trim();
        if saved.is_empty() {
            self.fallback_api_key.clone()
        } else {
            Some(saved.to_string())
        }
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("storage.json")
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "", "autoflow")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".autoflow"))
}

/// Where downloaded blueprints go: the user's download folder when known.
pub fn default_download_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config_from(&[("AUTOFLOW_DATA_DIR", "/tmp/autoflow-test")]);
        assert_eq!(cfg.fallback_api_key, None);
        assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(cfg.base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(cfg.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(
            cfg.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
        assert_eq!(cfg.store_path(), PathBuf::from("/tmp/autoflow-test/storage.json"));
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let cfg = config_from(&[
            ("GEMINI_BASE_URL", "http://localhost:9000/models/"),
            ("GEMINI_MODEL", "gemini-1.5-pro"),
            ("GEMINI_API_KEY", "env-key"),
        ]);
        assert_eq!(cfg.endpoint(), "http://localhost:9000/models/gemini-1.5-pro:generateContent");
        assert_eq!(cfg.fallback_api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let cfg = config_from(&[("GEMINI_API_KEY", "   "), ("GEMINI_MODEL", "")]);
        assert_eq!(cfg.fallback_api_key, None);
        assert_eq!(cfg.model, DEFAULT_GEMINI_MODEL);
    }

    #[test]
    fn test_saved_key_wins_over_env() {
        let cfg = config_from(&[("GEMINI_API_KEY", "env-key")]);
        assert_eq!(cfg.resolve_api_key("saved-key").as_deref(), Some("saved-key"));
        assert_eq!(cfg.resolve_api_key("  ").as_deref(), Some("env-key"));

        let cfg = config_from(&[]);
        assert_eq!(cfg.resolve_api_key(""), None);
    }
}
