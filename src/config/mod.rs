use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL every endpoint is appended to.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Root resource that carries the link map.
    #[serde(default = "default_root_path")]
    pub root_path: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_root_path() -> String {
    constants::DEFAULT_ROOT_PATH.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            root_path: default_root_path(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    ///
    /// # Environment Variables
    /// - `EUROBASKET_API_BASE_URL` - Override API base URL
    /// - `EUROBASKET_ROOT_PATH` - Override root resource path
    /// - `EUROBASKET_LOG_FILE` - Override log file path
    /// - `EUROBASKET_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Notes
    /// - A missing config file is not an error; defaults are used instead
    /// - Environment variables take precedence over config file values
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reads the file at `path`.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = Self::load_file_or_default(path).await?;

        config.apply_env_overrides();
        config.api_base_url = normalize_base_url(&config.api_base_url);
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(root_path) = std::env::var(env_vars::ROOT_PATH) {
            self.root_path = root_path;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.root_path,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("Root Resource:");
        println!("{}", config.root_path);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and prefixes a bare
    /// domain with `https://`.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_base_url: normalize_base_url(&self.api_base_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Reads the file at `path` without applying overrides. Only a missing
    /// file falls back to defaults; unreadable or malformed files are errors.
    pub async fn load_file_or_default(path: &str) -> Result<Self, AppError> {
        if Path::new(path).exists() {
            Self::load_from_path(path).await
        } else {
            Ok(Config::default())
        }
    }

    /// Loads configuration from a custom file path without applying overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Adds an `https://` scheme to bare domains and drops a trailing slash so that
/// endpoint paths can be appended directly.
pub fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn clear_env() {
        unsafe {
            std::env::remove_var(env_vars::API_BASE_URL);
            std::env::remove_var(env_vars::ROOT_PATH);
            std::env::remove_var(env_vars::LOG_FILE);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_base_url = "https://api.example.com"
root_path = "/custom/today.json"
log_file_path = "/custom/log/path"
http_timeout_seconds = 5
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.root_path, "/custom/today.json");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[tokio::test]
    async fn test_config_partial_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(&config_path, "api_base_url = \"https://api.example.com\"\n")
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.root_path, constants::DEFAULT_ROOT_PATH);
        assert_eq!(config.log_file_path, None);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }

    #[tokio::test]
    async fn test_config_empty_file_is_default() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("empty_config.toml");
        let config_path_str = config_path.to_string_lossy();
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            api_base_url: "https://api.example.com".to_string(),
            root_path: "/eurobasket/2029/today.json".to_string(),
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 12,
        };
        original_config
            .save_to_path(&config_path_str)
            .await
            .unwrap();

        assert!(config_path.exists());
        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[tokio::test]
    async fn test_config_save_normalizes_base_url() {
        let test_cases = vec![
            ("api.example.com", "https://api.example.com"),
            ("api.example.com/api/", "https://api.example.com/api"),
            ("http://localhost:8080", "http://localhost:8080"),
            ("https://www.fiba.basketball/api", "https://www.fiba.basketball/api"),
        ];

        for (input, expected) in test_cases {
            let temp_dir = tempdir().unwrap();
            let config_path = temp_dir.path().join("config.toml");
            let config_path_str = config_path.to_string_lossy();

            let config = Config {
                api_base_url: input.to_string(),
                ..Config::default()
            };
            config.save_to_path(&config_path_str).await.unwrap();

            let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
            assert_eq!(loaded_config.api_base_url, expected, "input: {input}");
        }
    }

    #[tokio::test]
    async fn test_config_malformed_toml_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("malformed_config.toml");
        let config_path_str = config_path.to_string_lossy();

        let malformed_content = r#"
api_base_url = "https://api.example.com"
[invalid_section
malformed = "data
"#;
        tokio::fs::write(&config_path, malformed_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path_str).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/path/config.toml").await;
        assert!(matches!(result.unwrap_err(), AppError::Io(_)));
    }

    #[test]
    fn test_config_without_log_file_path_serialization() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml_string.contains("api_base_url = \"https://www.fiba.basketball/api\""));
        assert!(!toml_string.contains("log_file_path"));
    }

    #[test]
    fn test_config_paths() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("eurobasket_stats"));
        assert!(config_path.ends_with("config.toml"));

        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("eurobasket_stats"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_falls_back_to_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let config = Config::load_with_overrides(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        tokio::fs::write(
            &config_path,
            "api_base_url = \"https://file.example.com\"\nhttp_timeout_seconds = 10\n",
        )
        .await
        .unwrap();

        unsafe {
            std::env::set_var(env_vars::API_BASE_URL, "https://env.example.com");
            std::env::set_var(env_vars::ROOT_PATH, "/env/today.json");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "3");
        }

        let config = Config::load_with_overrides(&config_path_str).await;
        clear_env();

        let config = config.unwrap();
        assert_eq!(config.api_base_url, "https://env.example.com");
        assert_eq!(config.root_path, "/env/today.json");
        assert_eq!(config.http_timeout_seconds, 3);
    }

    #[tokio::test]
    #[serial]
    async fn test_invalid_override_fails_validation() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        tokio::fs::write(&config_path, "root_path = \"today.json\"\n")
            .await
            .unwrap();

        let result = Config::load_with_overrides(&config_path_str).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    #[serial]
    async fn test_env_base_url_is_normalized() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        unsafe {
            std::env::set_var(env_vars::API_BASE_URL, "api.example.com/");
        }
        let config = Config::load_with_overrides(&config_path.to_string_lossy()).await;
        clear_env();

        assert_eq!(config.unwrap().api_base_url, "https://api.example.com");
    }

    #[tokio::test]
    async fn test_load_file_or_default_keeps_parse_errors() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        let config = Config::load_file_or_default(&missing.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());

        let broken = temp_dir.path().join("broken.toml");
        tokio::fs::write(&broken, "http_timeout_seconds = \"oops\"\n")
            .await
            .unwrap();
        let result = Config::load_file_or_default(&broken.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url(" example.com/ "), "https://example.com");
        assert_eq!(normalize_base_url("http://127.0.0.1:9000"), "http://127.0.0.1:9000");
    }
}
