//! Configuration system for the decision console
//!
//! Supports multiple configuration sources with the following precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (DCONSOLE_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Main console configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Decision backend connection settings
    pub backend: BackendSettings,

    /// Background refresh settings
    pub refresh: RefreshSettings,

    /// Logging configuration
    pub logging: LoggingSettings,

    /// Data storage paths
    pub storage: StorageSettings,
}

/// Decision backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Backend base URL
    pub base_url: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

/// Background refresh settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshSettings {
    /// Refresh store contents on an interval
    pub auto_refresh: bool,

    /// Refresh interval in seconds
    pub interval_secs: u64,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (empty = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

/// Storage path settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Base data directory (exports, saved boards)
    pub data_dir: String,
}

// Default implementations

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            backend: BackendSettings::default(),
            refresh: RefreshSettings::default(),
            logging: LoggingSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3005".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            interval_secs: 5,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            max_files: 5,
            json_format: false,
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.decision-console".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        // 1. Load from config file if it exists
        let config_file = Self::find_config_file(config_path)?;
        if let Some(path) = config_file {
            debug!(path = %path.display(), "Loading configuration file");
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;
            config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
            info!(path = %path.display(), "Configuration loaded from file");
        }

        // 2. Apply environment variable overrides
        config.apply_env_overrides();

        // 3. Expand paths
        config.expand_paths();

        // 4. Validate
        config.validate()?;

        Ok(config)
    }

    /// Find the configuration file to use
    fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        // If explicit path provided, use it (error if not found)
        if let Some(path) = explicit_path {
            let expanded = shellexpand::tilde(path);
            let path = PathBuf::from(expanded.as_ref());
            if path.exists() {
                return Ok(Some(path));
            } else {
                return Err(Error::config_not_found(path));
            }
        }

        // Search in standard locations
        let search_paths = [
            // Current directory
            PathBuf::from("decision-console.toml"),
            PathBuf::from("config.toml"),
            // User config directory
            dirs::config_dir()
                .map(|p| p.join("decision-console").join("console.toml"))
                .unwrap_or_default(),
            // Home directory
            dirs::home_dir()
                .map(|p| p.join(".decision-console").join("console.toml"))
                .unwrap_or_default(),
            // System config (Linux)
            PathBuf::from("/etc/decision-console/console.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path.clone()));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Backend settings
        if let Ok(val) = std::env::var("DCONSOLE_BACKEND_URL") {
            self.backend.base_url = val;
        }
        if let Ok(val) = std::env::var("DCONSOLE_REQUEST_TIMEOUT_SECS") {
            if let Ok(n) = val.parse() {
                self.backend.request_timeout_secs = n;
            }
        }

        // Refresh settings
        if let Ok(val) = std::env::var("DCONSOLE_AUTO_REFRESH") {
            self.refresh.auto_refresh = val.to_lowercase() == "true" || val == "1";
        }
        if let Ok(val) = std::env::var("DCONSOLE_REFRESH_INTERVAL_SECS") {
            if let Ok(n) = val.parse() {
                self.refresh.interval_secs = n;
            }
        }

        // Logging settings
        if let Ok(val) = std::env::var("DCONSOLE_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("DCONSOLE_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Ok(val) = std::env::var("DCONSOLE_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }

        // Storage settings
        if let Ok(val) = std::env::var("DCONSOLE_DATA_DIR") {
            self.storage.data_dir = val;
        }
    }

    /// Expand ~ and other path variables
    fn expand_paths(&mut self) {
        self.storage.data_dir = expand_path(&self.storage.data_dir);

        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        // Validate backend URL
        if self.backend.base_url.is_empty() {
            return Err(Error::Config("Backend URL cannot be empty".to_string()));
        }
        let parsed = url::Url::parse(&self.backend.base_url)
            .map_err(|e| Error::Config(format!("Invalid backend URL: {}", e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::Config(
                "Backend URL must start with http:// or https://".to_string(),
            ));
        }

        // Validate refresh interval
        if self.refresh.interval_secs == 0 {
            return Err(Error::Config(
                "Refresh interval must be at least 1 second".to_string(),
            ));
        }

        // Validate log level
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::Config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            )));
        }

        Ok(())
    }

    /// Get the data directory as a PathBuf
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir)
    }
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or_else(|_| std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Initialize a new configuration file
pub fn init_config(path: Option<&str>, force: bool) -> Result<()> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".decision-console")
                .join("console.toml")
        });

    // Check if file exists
    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
    }

    // Generate default config with comments
    let config_content = generate_default_config();

    // Write the file
    fs::write(&config_path, config_content).map_err(|e| Error::IoWrite {
        path: config_path.clone(),
        source: e,
    })?;

    println!("Configuration file created: {}", config_path.display());
    Ok(())
}

/// Generate default configuration content with comments
fn generate_default_config() -> String {
    r#"# Decision Console Configuration

[backend]
# Decision backend base URL
base_url = "http://localhost:3005"

# Request timeout in seconds
request_timeout_secs = 30

[refresh]
# Refresh store contents on an interval
auto_refresh = true

# Refresh interval in seconds
interval_secs = 5

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log file path (comment out to disable file logging)
# file = "~/.decision-console/logs/console.log"

# Number of rotated log files to keep
max_files = 5

# Enable JSON formatted logging
json_format = false

[storage]
# Base data directory (exports, saved boards)
data_dir = "~/.decision-console"
"#
    .to_string()
}
