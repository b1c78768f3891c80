//! # lex-config
//!
//! Layered configuration loading for lexlift using figment.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`LEXLIFT_*` prefix, `__` as separator)
//! 2. Project-level `.lexlift/config.toml`
//! 3. User-level `~/.config/lexlift/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `LEXLIFT_WIKI__MAXLAG` → `wiki.maxlag`,
//! `LEXLIFT_SERVER__PORT` → `server.port`, and so on; the double underscore
//! separates nested sections.

mod crawl;
mod error;
mod server;
mod store;
mod wiki;

pub use crawl::CrawlConfig;
pub use error::ConfigError;
pub use server::ServerConfig;
pub use store::StoreConfig;
pub use wiki::WikiConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LexConfig {
    #[serde(default)]
    pub wiki: WikiConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl LexConfig {
    /// Load configuration from all sources (TOML files + environment).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when a source cannot be merged or extracted.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment()
            .extract()
            .map_err(ConfigError::from)
            .and_then(Self::validated)
    }

    /// Load configuration with `.env` file support. The typical entry point
    /// for the binary and for integration tests.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when a source cannot be merged or extracted.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load from an explicit TOML file, env still winning.
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the file cannot be merged or extracted.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.into()))
            .merge(Env::prefixed("LEXLIFT_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(Self::validated)
    }

    /// Reject values no pipeline can run with.
    fn validated(self) -> Result<Self, ConfigError> {
        if self.crawl.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "crawl.page_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.server.max_tiles == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_tiles".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(self)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can layer additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".lexlift/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LEXLIFT_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lexlift").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LexConfig::default();
        assert_eq!(config.crawl.category, "English verbs");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.store.queue_file, "verbs.txt");
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = LexConfig::figment();
        let config: LexConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.wiki.maxlag, 5);
        assert_eq!(config.crawl.page_size, 500);
    }
}
