use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TRANSLATION_DELAY_MS,
};
use crate::errors::{RaseedError, RaseedResult};
use crate::language::LanguageCode;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, sync::RwLock, time::Duration};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub translation_delay_ms: u64,
    pub log_level: String,
    pub log_dir: String,
    pub default_language: Option<LanguageCode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            translation_delay_ms: DEFAULT_TRANSLATION_DELAY_MS,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            default_language: None,
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn translation_delay(&self) -> Duration {
        Duration::from_millis(self.translation_delay_ms)
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads `~/.config/raseed/config.json`, writing the defaults there on first
/// run, then applies environment overrides.
pub fn initialize_config() -> RaseedResult<()> {
    let config_path = get_config_path()?;

    let mut config = if config_path.exists() {
        load_config_from(&config_path)?
    } else {
        let config = Config::default();
        save_config_to(&config, &config_path)?;
        config
    };

    apply_env_overrides(&mut config);
    validate_config(&config)?;

    match CONFIG.write() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }

    Ok(())
}

fn get_config_path() -> RaseedResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| RaseedError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("raseed").join("config.json"))
}

pub fn load_config_from(path: &Path) -> RaseedResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| RaseedError::config_error(format!("Failed to read config file: {}", e)))?;

    let config: Config = serde_json::from_str(&config_str)
        .map_err(|e| RaseedError::config_error(format!("Failed to parse config: {}", e)))?;

    Ok(config)
}

pub fn save_config_to(config: &Config, path: &Path) -> RaseedResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            RaseedError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| RaseedError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| RaseedError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(())
}

/// `RASEED_API_URL` and `RASEED_LOG_LEVEL` win over the file.
pub fn apply_env_overrides(config: &mut Config) {
    apply_overrides(config, |key| env::var(key).ok());
}

fn apply_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup("RASEED_API_URL") {
        config.api_base_url = url;
    }
    if let Some(level) = lookup("RASEED_LOG_LEVEL") {
        config.log_level = level.to_lowercase();
    }
}

pub fn validate_config(config: &Config) -> RaseedResult<()> {
    let url = config.api_base_url.trim();
    if url.is_empty() {
        return Err(RaseedError::config_error("api_base_url is required"));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(RaseedError::config_error(
            "api_base_url must start with http:// or https://",
        ));
    }

    if config.request_timeout_secs == 0 {
        return Err(RaseedError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(RaseedError::config_error(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    match CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_url() {
        let mut config = Config::default();
        config.api_base_url = "localhost:8001".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_timeout() {
        let mut config = Config::default();
        config.request_timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_log_level() {
        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.api_base_url = "https://raseed.example".to_string();
        config.default_language = Some(LanguageCode::Hi);
        save_config_to(&config, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.api_base_url, "https://raseed.example");
        assert_eq!(loaded.default_language, Some(LanguageCode::Hi));
        assert_eq!(loaded.translation_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_level": "debug" }"#).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(loaded.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_override_repairs_bad_file_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_level": "loud", "api_base_url": "nowhere" }"#).unwrap();

        let mut config = load_config_from(&path).unwrap();
        assert!(validate_config(&config).is_err());

        apply_overrides(&mut config, |key| match key {
            "RASEED_LOG_LEVEL" => Some("WARN".to_string()),
            "RASEED_API_URL" => Some("https://raseed.example".to_string()),
            _ => None,
        });
        assert_eq!(config.log_level, "warn");
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(RaseedError::Config(_))
        ));
    }
}
