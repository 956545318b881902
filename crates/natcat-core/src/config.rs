//! Layered configuration.
//!
//! Sources, highest priority first:
//! 1. Environment variables (`NATCAT_*`, `__` separates sections)
//! 2. An explicit TOML file, or `natcat.toml` in the working directory
//! 3. Built-in defaults
//!
//! `NATCAT_FEED__MIN_MAGNITUDE=5.0` maps to `feed.min_magnitude`.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::feed::{FeedQuery, DEFAULT_LOOKBACK_DAYS, DEFAULT_MIN_MAGNITUDE, USGS_EVENT_QUERY_URL};
use crate::retry::RetryPolicy;

const LOCAL_CONFIG_FILE: &str = "natcat.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Figment(Box::new(error))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeedConfig {
    pub base_url: String,
    pub min_magnitude: f64,
    pub lookback_days: u32,
    pub timeout_ms: u64,
    pub max_retries: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(USGS_EVENT_QUERY_URL),
            min_magnitude: DEFAULT_MIN_MAGNITUDE,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            timeout_ms: 10_000,
            max_retries: 2,
        }
    }
}

impl FeedConfig {
    pub fn query(&self) -> Result<FeedQuery, ConfigError> {
        FeedQuery::new(self.min_magnitude, self.lookback_days).map_err(|error| {
            ConfigError::InvalidValue {
                field: "feed",
                reason: error.to_string(),
            }
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::exponential(self.max_retries)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ZonesConfig {
    /// Zone catalog JSON file; the bundled sample book is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NatcatConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub zones: ZonesConfig,
}

impl NatcatConfig {
    /// Load from `natcat.toml` (if present) and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment(None))
    }

    /// Load with an explicit TOML file in place of `natcat.toml`.
    ///
    /// Unlike the implicit local file, an explicit file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::InvalidValue {
                field: "config",
                reason: format!("file '{}' does not exist", path.display()),
            });
        }
        Self::extract(Self::figment(Some(path)))
    }

    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match file {
            Some(path) => figment = figment.merge(Toml::file(path)),
            None => {
                let local = PathBuf::from(LOCAL_CONFIG_FILE);
                if local.exists() {
                    figment = figment.merge(Toml::file(local));
                }
            }
        }

        figment.merge(Env::prefixed("NATCAT_").split("__"))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.feed.query()?;

        if self.feed.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "feed.base_url",
                reason: String::from("must not be empty"),
            });
        }
        if self.feed.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "feed.timeout_ms",
                reason: String::from("must be greater than zero"),
            });
        }
        Ok(())
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_match_feed_defaults() {
        let config = NatcatConfig::default();
        assert_eq!(config.feed.min_magnitude, 4.0);
        assert_eq!(config.feed.lookback_days, 7);
        assert_eq!(config.feed.timeout_ms, 10_000);
        assert!(config.zones.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn local_file_and_env_layer_over_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "natcat.toml",
                r#"
                [feed]
                min_magnitude = 5.5
                lookback_days = 14

                [zones]
                path = "book.json"
                "#,
            )?;
            jail.set_env("NATCAT_FEED__LOOKBACK_DAYS", "30");

            let config = NatcatConfig::load().expect("config loads");
            assert_eq!(config.feed.min_magnitude, 5.5);
            assert_eq!(config.feed.lookback_days, 30);
            assert_eq!(config.zones.path, Some(PathBuf::from("book.json")));
            assert_eq!(config.feed.timeout_ms, 10_000);
            Ok(())
        });
    }

    #[test]
    fn explicit_file_replaces_local_lookup() {
        Jail::expect_with(|jail| {
            jail.create_file("natcat.toml", "[feed]\nmin_magnitude = 6.0\n")?;
            jail.create_file("ops.toml", "[feed]\nmin_magnitude = 4.5\n")?;

            let config = NatcatConfig::load_from("ops.toml").expect("config loads");
            assert_eq!(config.feed.min_magnitude, 4.5);
            Ok(())
        });
    }

    #[test]
    fn explicit_file_must_exist() {
        Jail::expect_with(|jail| {
            jail.create_file("natcat.toml", "[feed]\nmin_magnitude = 6.0\n")?;

            let error = NatcatConfig::load_from("missing.toml").expect_err("must fail");
            assert!(matches!(
                error,
                ConfigError::InvalidValue { field: "config", ref reason } if reason.contains("missing.toml")
            ));
            Ok(())
        });
    }

    #[test]
    fn rejects_out_of_range_lookback() {
        Jail::expect_with(|jail| {
            jail.set_env("NATCAT_FEED__LOOKBACK_DAYS", "0");
            let error = NatcatConfig::load().expect_err("must fail");
            assert!(matches!(error, ConfigError::InvalidValue { field: "feed", .. }));
            Ok(())
        });
    }
}
