use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// CSV or JSON listing file
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/LLC Data.csv")
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_hub_limit")]
    pub hub_limit: usize,
    #[serde(default = "default_state_page_limit")]
    pub state_page_limit: usize,
    #[serde(default = "default_top_rated_limit")]
    pub top_rated_limit: usize,
    /// Widen empty category results to generic business services
    #[serde(default = "default_true")]
    pub fallback_enabled: bool,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            hub_limit: default_hub_limit(),
            state_page_limit: default_state_page_limit(),
            top_rated_limit: default_top_rated_limit(),
            fallback_enabled: default_true(),
        }
    }
}

impl DirectorySettings {
    /// Requested limit, defaulted and capped
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).clamp(1, self.max_limit.max(1))
    }
}

fn default_limit() -> usize { crate::core::DEFAULT_LIMIT }
fn default_max_limit() -> usize { 500 }
fn default_hub_limit() -> usize { 100 }
fn default_state_page_limit() -> usize { 500 }
fn default_top_rated_limit() -> usize { 10 }
fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String { "http://localhost:5000".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BIZDIR)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BIZDIR__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("BIZDIR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_directory_settings() {
        let directory = DirectorySettings::default();
        assert_eq!(directory.default_limit, 50);
        assert_eq!(directory.max_limit, 500);
        assert_eq!(directory.hub_limit, 100);
        assert!(directory.fallback_enabled);
    }

    #[test]
    fn test_effective_limit() {
        let directory = DirectorySettings::default();
        assert_eq!(directory.effective_limit(None), 50);
        assert_eq!(directory.effective_limit(Some(5)), 5);
        assert_eq!(directory.effective_limit(Some(5000)), 500);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 8080\n\n[directory]\nfallback_enabled = false\n"
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert!(!settings.directory.fallback_enabled);
        assert_eq!(settings.directory.default_limit, 50);
        assert_eq!(settings.data.path, PathBuf::from("data/LLC Data.csv"));
    }
}
