//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `CAMPS_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Settings controlling the listener and the camp store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CAMPS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the in-memory store is used.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub database_max_connections: Option<u32>,
    /// Absolute base (for example `https://camps.example.com`) used for
    /// `Location` headers. Relative paths are emitted when unset.
    pub public_base_url: Option<String>,
    /// Seed the in-memory store with the sample camp. The PostgreSQL store
    /// is seeded by its migrations instead.
    pub seed_sample_data: Option<bool>,
}

/// Raised when a configured value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value}: {message}")]
    BindAddr { value: String, message: String },
}

impl AppSettings {
    /// The listener address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value is not a socket
    /// address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| {
            SettingsError::BindAddr {
                value: value.to_owned(),
                message: err.to_string(),
            }
        })
    }

    /// The database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Whether the in-memory store starts with the sample camp. Defaults to
    /// `true`.
    pub fn seed_sample_data(&self) -> bool {
        self.seed_sample_data.unwrap_or(true)
    }

    /// The public base URL, ignoring blank values.
    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "CAMPS_BIND_ADDR",
        "CAMPS_DATABASE_URL",
        "CAMPS_DATABASE_MAX_CONNECTIONS",
        "CAMPS_PUBLIC_BASE_URL",
        "CAMPS_SEED_SAMPLE_DATA",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("camps-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.database_max_connections(), DEFAULT_MAX_CONNECTIONS);
        assert!(settings.public_base_url().is_none());
        assert!(settings.seed_sample_data());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("CAMPS_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "CAMPS_DATABASE_URL",
                Some("postgres://camps@localhost/camps".to_owned()),
            ),
            ("CAMPS_DATABASE_MAX_CONNECTIONS", Some("4".to_owned())),
            (
                "CAMPS_PUBLIC_BASE_URL",
                Some("https://camps.example.com".to_owned()),
            ),
            ("CAMPS_SEED_SAMPLE_DATA", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address parses").port(),
            9090
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://camps@localhost/camps")
        );
        assert_eq!(settings.database_max_connections(), 4);
        assert_eq!(
            settings.public_base_url(),
            Some("https://camps.example.com")
        );
        assert!(!settings.seed_sample_data());
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let _guard = lock_env([
            ("CAMPS_BIND_ADDR", None::<String>),
            ("CAMPS_DATABASE_URL", Some("  ".to_owned())),
            ("CAMPS_DATABASE_MAX_CONNECTIONS", None),
            ("CAMPS_PUBLIC_BASE_URL", None),
            ("CAMPS_SEED_SAMPLE_DATA", None),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }

    #[rstest]
    fn unparsable_bind_addr_is_reported() {
        let settings = AppSettings {
            bind_addr: Some("not an address".to_owned()),
            database_url: None,
            database_max_connections: None,
            public_base_url: None,
            seed_sample_data: None,
        };

        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::BindAddr { .. })
        ));
    }
}
