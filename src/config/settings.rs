//! Application settings loaded from environment variables.

use std::env;

use thiserror::Error;

use super::constants::{DEFAULT_APP_PORT, DEFAULT_DB_PORT};

/// Configuration loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("load {group} config: required key {key} missing value")]
    Missing {
        group: &'static str,
        key: &'static str,
    },

    #[error("load {group} config: {key} has invalid value {value:?}")]
    Invalid {
        group: &'static str,
        key: &'static str,
        value: String,
    },
}

/// HTTP listener settings (`APP_*`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
}

/// Datastore connection settings (`DB_*`)
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub username: String,
    password: String,
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl DbConfig {
    /// Datastore password.
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app: AppConfig,
    pub db: DbConfig,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let app = AppConfig {
            port: vars.port("APP", "APP_PORT", DEFAULT_APP_PORT)?,
        };

        let db = DbConfig {
            host: vars.required("DB", "DB_HOST")?,
            port: vars.port("DB", "DB_PORT", DEFAULT_DB_PORT)?,
            name: vars.required("DB", "DB_NAME")?,
            username: vars.required("DB", "DB_USERNAME")?,
            password: vars.required("DB", "DB_PASSWORD")?,
        };

        Ok(Self { app, db })
    }
}

struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, group: &'static str, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::Missing { group, key })
    }

    fn port(&self, group: &'static str, key: &'static str, default: u16) -> Result<u16, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { group, key, value }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_with(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_env() -> HashMap<String, String> {
        env_with(&[
            ("DB_HOST", "localhost"),
            ("DB_NAME", "app"),
            ("DB_USERNAME", "postgres"),
            ("DB_PASSWORD", "secret"),
        ])
    }

    #[test]
    fn test_defaults_applied() {
        let vars = full_env();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.db.port, 5432);
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.password(), "secret");
    }

    #[test]
    fn test_explicit_ports() {
        let mut vars = full_env();
        vars.insert("APP_PORT".into(), "9000".into());
        vars.insert("DB_PORT".into(), "6543".into());

        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.app.port, 9000);
        assert_eq!(config.db.port, 6543);
    }

    #[test]
    fn test_missing_required_key() {
        let mut vars = full_env();
        vars.remove("DB_NAME");

        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing {
                group: "DB",
                key: "DB_NAME"
            }
        );
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let mut vars = full_env();
        vars.insert("DB_PASSWORD".into(), "   ".into());

        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Missing { key: "DB_PASSWORD", .. }));
    }

    #[test]
    fn test_invalid_port() {
        let mut vars = full_env();
        vars.insert("APP_PORT".into(), "eighty".into());

        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "APP_PORT", .. }));
    }

    #[test]
    fn test_debug_redacts_password() {
        let vars = full_env();
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();

        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("secret"));
    }
}
