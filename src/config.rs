use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Backend-side directory prefix stripped from screenshot file paths
    #[serde(default = "default_storage_root")]
    pub storage_root: String,
    /// Route under which the backend serves screenshot files
    #[serde(default = "default_screenshot_route")]
    pub screenshot_route: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_storage_root() -> String {
    "data/screenshots/".to_string()
}

fn default_screenshot_route() -> String {
    "/screenshots/".to_string()
}

fn default_poll_interval_secs() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            storage_root: default_storage_root(),
            screenshot_route: default_screenshot_route(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(contents).context("Invalid config file")?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_yaml(&contents)
    }

    /// Poll interval, never below one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists and defaults should be used.
pub fn find_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/shotdeck/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("shotdeck").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.storage_root, "data/screenshots/");
        assert_eq!(config.screenshot_route, "/screenshots/");
        assert_eq!(config.poll_interval_secs, 5);
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let config = Config::from_yaml("base_url: http://capture.local:9000\npoll_interval_secs: 2\n").unwrap();
        assert_eq!(config.base_url, "http://capture.local:9000");
        assert_eq!(config.poll_interval_secs, 2);
        assert_eq!(config.storage_root, "data/screenshots/");
    }

    #[test]
    fn test_poll_interval_floor() {
        let config = Config {
            poll_interval_secs: 0,
            ..Config::default()
        };
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "storage_root: /var/capture/").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.storage_root, "/var/capture/");
    }

    #[test]
    fn test_missing_cli_path_is_error() {
        let result = find_config_path(Some("/definitely/not/here.yaml".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("poll_interval_secs: [not, a, number]").is_err());
    }
}
