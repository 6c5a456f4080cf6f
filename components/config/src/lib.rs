//! Process-wide configuration, loaded once at startup and passed into the
//! state explicitly rather than read ambiently.
//!
//! Every section carries compiled-in defaults; `configure()` then applies
//! environment-variable overrides on top of whatever was deserialized.

use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::Deserialize;

/// Applies environmental overrides and adjustments.
pub trait Configuration {
    fn configure(&mut self);
}

fn env_override<T: FromStr>(field: &mut T, key: &str)
where
    T::Err: Display,
{
    if let Ok(value) = std::env::var(key) {
        match value.parse() {
            Ok(value) => {
                tracing::debug!("Applying environment overwrite for {key}");
                *field = value;
            }
            Err(e) => tracing::warn!("Invalid value for {key}: {e}"),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct General {
    /// Address and port the HTTP server binds to.
    pub bind_address: String,

    /// Kibibytes of memory the password-hashing semaphore may hand out.
    pub memory_limit: u32,
}

impl Default for General {
    fn default() -> Self {
        General {
            bind_address: "0.0.0.0:5000".to_owned(),
            memory_limit: 64 * 1024,
        }
    }
}

impl Configuration for General {
    fn configure(&mut self) {
        env_override(&mut self.bind_address, "DEVCONNECT_BIND_ADDRESS");
        env_override(&mut self.memory_limit, "DEVCONNECT_MEMORY_LIMIT");
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Database {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for Database {
    fn default() -> Self {
        Database {
            database_url: "postgres://postgres@localhost/devconnect".to_owned(),
            max_connections: 16,
        }
    }
}

impl Configuration for Database {
    fn configure(&mut self) {
        env_override(&mut self.database_url, "DATABASE_URL");
        env_override(&mut self.max_connections, "DEVCONNECT_DB_MAX_CONNECTIONS");
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Keys {
    /// Secret used to sign and verify identity tokens.
    pub token_secret: String,
}

impl Default for Keys {
    fn default() -> Self {
        Keys {
            token_secret: "change me".to_owned(),
        }
    }
}

impl Configuration for Keys {
    fn configure(&mut self) {
        env_override(&mut self.token_secret, "DEVCONNECT_TOKEN_SECRET");
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Shared {
    /// Seconds an issued token stays valid.
    ///
    /// The default is the historical value carried over from the first
    /// deployment, roughly 416 days.
    pub session_duration: u64,

    pub password_length: RangeInclusive<usize>,
    pub name_length: RangeInclusive<usize>,
}

impl Default for Shared {
    fn default() -> Self {
        Shared {
            session_duration: 36_000_000,
            password_length: 6..=512,
            name_length: 1..=64,
        }
    }
}

impl Configuration for Shared {
    fn configure(&mut self) {
        env_override(&mut self.session_duration, "DEVCONNECT_SESSION_DURATION");
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Services {
    pub github_client_id: Option<String>,
    pub github_client_secret: Option<String>,
}

impl Configuration for Services {
    fn configure(&mut self) {
        if let Ok(id) = std::env::var("DEVCONNECT_GITHUB_CLIENT_ID") {
            self.github_client_id = Some(id);
        }
        if let Ok(secret) = std::env::var("DEVCONNECT_GITHUB_CLIENT_SECRET") {
            self.github_client_secret = Some(secret);
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub general: General,
    pub db: Database,
    pub keys: Keys,
    pub shared: Shared,
    pub services: Services,
}

impl Configuration for Config {
    fn configure(&mut self) {
        self.general.configure();
        self.db.configure();
        self.keys.configure();
        self.shared.configure();
        self.services.configure();
    }
}

impl Config {
    /// Defaults plus environment overrides.
    pub fn load() -> Self {
        let mut config = Config::default();
        config.configure();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();

        assert_eq!(config.shared.session_duration, 36_000_000);
        assert!(config.shared.password_length.contains(&6));
        assert!(!config.shared.password_length.contains(&5));
    }

    #[test]
    fn environment_overrides_apply() {
        std::env::set_var("DEVCONNECT_SESSION_DURATION", "3600");

        let mut shared = Shared::default();
        shared.configure();

        assert_eq!(shared.session_duration, 3600);

        std::env::remove_var("DEVCONNECT_SESSION_DURATION");
    }

    #[test]
    fn invalid_override_keeps_default() {
        std::env::set_var("DEVCONNECT_MEMORY_LIMIT", "not a number");

        let mut general = General::default();
        general.configure();

        assert_eq!(general.memory_limit, 64 * 1024);

        std::env::remove_var("DEVCONNECT_MEMORY_LIMIT");
    }
}
