use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use url::Url;

/// Stub document served when no other source is configured.
pub const DEFAULT_SOURCE_URL: &str = "https://raw.githubusercontent.com/cjbatin/Swift4-Decoding-JSON-Using-Codable/master/WeatherForecast/StubData/londonWeather.json";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Example TOML:
    /// source_url = "https://example.com/weather.json"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Config {
    /// Configured source URL, or [`DEFAULT_SOURCE_URL`].
    pub fn source_url(&self) -> &str {
        self.source_url.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
    }

    /// Store a new source URL. Must be an absolute URL.
    pub fn set_source_url(&mut self, url: &str) -> Result<()> {
        let url = url.trim();
        Url::parse(url).with_context(|| format!("'{url}' is not a valid absolute URL"))?;
        self.source_url = Some(url.to_string());
        Ok(())
    }

    pub fn reset_source_url(&mut self) {
        self.source_url = None;
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "windview", "windview")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("windview-config-{}-{name}", std::process::id()))
            .join("config.toml")
    }

    #[test]
    fn default_source_url_when_unset() {
        let cfg = Config::default();
        assert_eq!(cfg.source_url(), DEFAULT_SOURCE_URL);
    }

    #[test]
    fn set_source_url_overrides_default() {
        let mut cfg = Config::default();
        cfg.set_source_url("  https://example.com/w.json ").expect("valid url");

        assert_eq!(cfg.source_url(), "https://example.com/w.json");

        cfg.reset_source_url();
        assert_eq!(cfg.source_url(), DEFAULT_SOURCE_URL);
    }

    #[test]
    fn set_source_url_rejects_relative_url() {
        let mut cfg = Config::default();
        let err = cfg.set_source_url("weather.json").unwrap_err();

        assert!(err.to_string().contains("not a valid absolute URL"));
        assert!(cfg.source_url.is_none());
    }

    #[test]
    fn missing_file_loads_defaults() {
        let cfg = Config::load_from(&scratch_path("missing")).expect("defaults");
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_keeps_source_url() {
        let path = scratch_path("roundtrip");
        let mut cfg = Config::default();
        cfg.set_source_url("https://example.com/w.json").expect("valid url");

        cfg.save_to(&path).expect("save");
        let loaded = Config::load_from(&path).expect("load");
        let _ = fs::remove_dir_all(path.parent().expect("has parent"));

        assert_eq!(loaded, cfg);
    }

    #[test]
    fn malformed_file_reports_path() {
        let path = scratch_path("malformed");
        fs::create_dir_all(path.parent().expect("has parent")).expect("mkdir");
        fs::write(&path, "source_url = [").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        let _ = fs::remove_dir_all(path.parent().expect("has parent"));

        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
