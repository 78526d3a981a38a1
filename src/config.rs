use crate::error::{Result, WorklistAiError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash-exp".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WorklistAiError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("worklist-ai").join("config.json"))
    }

    /// Resolve the engine credential. The environment variable wins over the
    /// config file; the value is handed to the engine only and never logged.
    pub fn get_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key.clone().ok_or(WorklistAiError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-2.0-flash-exp");
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            api_key: Some("test-key".into()),
            model: "gemini-2.0-flash-exp".into(),
            timeout_seconds: 30,
        };

        let json = serde_json::to_string(&config).expect("serialize failed");
        let restored: Config = serde_json::from_str(&json).expect("deserialize failed");
        assert_eq!(restored.api_key.as_deref(), Some("test-key"));
        assert_eq!(restored.timeout_seconds, 30);
    }
}
