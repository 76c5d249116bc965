//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed by reference
//! to whatever needs it. Nothing reads the environment after that.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://shortener.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PUBLIC_BASE_URL` - Base used to render short links, without trailing `/`
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;
use std::path::Path;
use std::time::Duration;

/// File extensions accepted for on-disk SQLite databases.
const DATABASE_FILE_SUFFIXES: &[&str] = &["sqlite3", "db", "db3", "sqlite"];

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public origin of the redirect endpoint, e.g. `https://s.example.com`.
    pub public_base_url: String,
    pub log_level: String,
    pub log_format: String,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    /// In-memory databases always use a single connection.
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://shortener.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let public_base_url =
            env::var("PUBLIC_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 5)?;
        let db_connect_timeout = parse_var("DB_CONNECT_TIMEOUT", 30)?;

        Ok(Self {
            database_url,
            listen_addr,
            public_base_url,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a SQLite URL, or names a file without a known
    ///   database extension
    /// - `public_base_url` is not an http(s) URL or ends with `/`
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        validate_database_url(&self.database_url)?;

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.public_base_url
            );
        }

        if self.public_base_url.ends_with('/') {
            anyhow::bail!(
                "PUBLIC_BASE_URL must not end with '/', got '{}'",
                self.public_base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Pool acquire timeout as a [`Duration`].
    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_connect_timeout)
    }

    /// Renders the public short link for a code.
    pub fn short_link(&self, code: &str) -> String {
        short_link(&self.public_base_url, code)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Public base URL: {}", self.public_base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Joins a public base URL (no trailing `/`) and a short code.
pub fn short_link(public_base_url: &str, code: &str) -> String {
    format!("{}/{}", public_base_url, code)
}

/// Returns true if the SQLite URL points at an in-memory database.
pub fn is_memory_database(database_url: &str) -> bool {
    database_url == "sqlite::memory:"
        || database_url.starts_with("sqlite::memory:?")
        || database_url.contains("mode=memory")
}

fn validate_database_url(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite:") else {
        anyhow::bail!(
            "DATABASE_URL must start with 'sqlite:', got '{}'",
            database_url
        );
    };

    if is_memory_database(database_url) {
        return Ok(());
    }

    let path = rest.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or_default();
    let suffix = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    if !DATABASE_FILE_SUFFIXES.contains(&suffix) {
        anyhow::bail!(
            "DATABASE_URL must name a .sqlite3, .db, .db3 or .sqlite file, got '{}'",
            database_url
        );
    }

    Ok(())
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{name} must be a number, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://shortener.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            public_base_url: "https://s.example.com".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();
        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_public_base_url_validation() {
        let mut config = valid_config();

        config.public_base_url = "https://s.example.com/".to_string();
        assert!(config.validate().is_err());

        config.public_base_url = "s.example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_database_url_suffixes() {
        for url in [
            "sqlite://data/links.db",
            "sqlite://links.sqlite3",
            "sqlite:links.db3",
            "sqlite://links.sqlite?mode=rwc",
            "sqlite::memory:",
        ] {
            assert!(validate_database_url(url).is_ok(), "{url} should be valid");
        }

        for url in [
            "sqlite://links.txt",
            "sqlite://links",
            "postgres://localhost/test",
        ] {
            assert!(validate_database_url(url).is_err(), "{url} should be invalid");
        }
    }

    #[test]
    fn test_is_memory_database() {
        assert!(is_memory_database("sqlite::memory:"));
        assert!(is_memory_database("sqlite://file:test?mode=memory&cache=shared"));
        assert!(!is_memory_database("sqlite://shortener.db"));
    }

    #[test]
    fn test_short_link() {
        let config = valid_config();
        assert_eq!(
            config.short_link("46plOCsbuD"),
            "https://s.example.com/46plOCsbuD"
        );
        assert_eq!(
            short_link("http://localhost:3000", "FwKlhAM48s"),
            "http://localhost:3000/FwKlhAM48s"
        );
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("PUBLIC_BASE_URL");
            env::remove_var("DB_MAX_CONNECTIONS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://shortener.db");
        assert_eq!(config.public_base_url, "http://localhost:3000");
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite::memory:");
            env::set_var("DB_MAX_CONNECTIONS", "8");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.db_max_connections, 8);

        unsafe {
            env::set_var("DB_MAX_CONNECTIONS", "many");
        }
        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("DB_MAX_CONNECTIONS");
        }
    }
}
