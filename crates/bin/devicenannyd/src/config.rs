//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `devicenanny.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use devicenanny_adapter_http_axum::state::DashboardSettings;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Board presentation settings.
    pub dashboard: DashboardConfig,
    /// External pages the board links to.
    pub links: LinksConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Board presentation.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Seconds between automatic page reloads.
    pub refresh_seconds: u32,
    /// Print the raw database error on the page when the query fails.
    pub show_error_details: bool,
    /// Directory holding `style.css` and other static assets.
    pub assets_dir: Option<PathBuf>,
}

/// External collaborators.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    /// Renewal page, called with `?userID=<value>`.
    pub renew_url: String,
    /// User listing page.
    pub users_url: String,
}

impl Config {
    /// Load configuration from `devicenanny.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("devicenanny.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("DEVICENANNY_HOST") {
            self.server.host = val;
        }
        if let Some(port) = lookup("DEVICENANNY_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = lookup("DEVICENANNY_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("DEVICENANNY_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = lookup("DEVICENANNY_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(secs) =
            lookup("DEVICENANNY_REFRESH_SECONDS").and_then(|val| val.parse().ok())
        {
            self.dashboard.refresh_seconds = secs;
        }
        if let Some(val) = lookup("DEVICENANNY_ASSETS_DIR") {
            self.dashboard.assets_dir = Some(PathBuf::from(val));
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.dashboard.refresh_seconds == 0 {
            return Err(ConfigError::Validation(
                "refresh_seconds must be non-zero".to_string(),
            ));
        }
        if self.links.renew_url.is_empty() || self.links.users_url.is_empty() {
            return Err(ConfigError::Validation(
                "link urls must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }

    /// Settings handed to the HTTP adapter.
    #[must_use]
    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            refresh_seconds: self.dashboard.refresh_seconds,
            show_error_details: self.dashboard.show_error_details,
            renew_url: self.links.renew_url.clone(),
            users_url: self.links.users_url.clone(),
            assets_dir: self.dashboard.assets_dir.clone(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:devicenanny.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "devicenannyd=info,devicenanny=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 15,
            show_error_details: false,
            assets_dir: None,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            renew_url: "renew.php".to_string(),
            users_url: "/users.php".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
