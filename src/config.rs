use crate::error::{Result, SmartSendError};
use serde::{Deserialize, Serialize};
use smartsend_common::gemini::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// APIキーを探す環境変数（先頭優先）
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    /// 長辺がこれを超える画像は縮小して送る（0で無効）
    pub max_image_size: u32,
    pub timeout_seconds: u64,
    pub temperature: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            max_image_size: 1568,
            timeout_seconds: 60,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SmartSendError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("smartsend").join("config.json"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// 環境変数を優先してAPIキーを取得
    pub fn get_api_key(&self) -> Result<String> {
        self.resolve_api_key(|name| std::env::var(name).ok())
    }

    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .chain(self.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or(SmartSendError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.max_image_size, 1568);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"model": "gemini-2.5-pro"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.5-pro");
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            api_key: Some("secret".into()),
            timeout_seconds: 15,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api_key.as_deref(), Some("secret"));
        assert_eq!(loaded.timeout_seconds, 15);
    }

    #[test]
    fn test_api_key_env_precedence() {
        let config = Config {
            api_key: Some("from-file".into()),
            ..Default::default()
        };

        let key = config
            .resolve_api_key(|name| (name == "API_KEY").then(|| "from-api-key".to_string()))
            .unwrap();
        assert_eq!(key, "from-api-key");

        let key = config
            .resolve_api_key(|name| match name {
                "GEMINI_API_KEY" => Some("from-gemini".to_string()),
                _ => Some("from-api-key".to_string()),
            })
            .unwrap();
        assert_eq!(key, "from-gemini");

        assert_eq!(config.resolve_api_key(|_| None).unwrap(), "from-file");
    }

    #[test]
    fn test_api_key_missing_or_blank() {
        let config = Config {
            api_key: Some("   ".into()),
            ..Default::default()
        };
        let err = config.resolve_api_key(|_| Some(String::new())).unwrap_err();
        assert!(matches!(err, SmartSendError::MissingApiKey));
    }
}
