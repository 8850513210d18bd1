//! Service configuration
//!
//! Settings come from the process environment (and a `.env` file in
//! development). Keys carry the `CONSULTATION` prefix and `__` between
//! nesting levels:
//!
//! | Variable | Field |
//! |---|---|
//! | `CONSULTATION__SERVER__HOST` | `server.host` |
//! | `CONSULTATION__SERVER__PORT` | `server.port` |
//! | `CONSULTATION__SERVER__ENVIRONMENT` | `server.environment` |
//! | `CONSULTATION__SERVER__LOG_LEVEL` | `server.log_level` |
//! | `CONSULTATION__SERVER__REQUEST_TIMEOUT_SECS` | `server.request_timeout_secs` |
//! | `CONSULTATION__SERVER__CORS_ORIGINS` | `server.cors_origins` |
//! | `CONSULTATION__CATALOG__PATH` | `catalog.path` |
//!
//! ```no_run
//! use consultation_service::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("listening on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod catalog;
mod error;
mod server;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "CONSULTATION";
const ENV_SEPARATOR: &str = "__";

/// Root configuration. Every section has defaults, so an empty environment
/// yields a runnable development setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Reads `.env` when present, then the prefixed environment variables.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Ignoring unreadable .env file");
            }
        }

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks every section; the first failure is returned.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.catalog.validate()
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::Path;
    use std::sync::Mutex;

    // Environment variables are process-wide.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "CONSULTATION__SERVER__PORT",
        "CONSULTATION__SERVER__ENVIRONMENT",
        "CONSULTATION__SERVER__REQUEST_TIMEOUT_SECS",
        "CONSULTATION__CATALOG__PATH",
    ];

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        for var in VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for var in VARS {
            env::remove_var(var);
        }
        result
    }

    #[test]
    fn test_empty_environment_gives_development_defaults() {
        let config = load_with(&[]).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.catalog.path.is_none());
        assert!(!config.is_production());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_keys_override_defaults() {
        let config = load_with(&[
            ("CONSULTATION__SERVER__PORT", "3000"),
            ("CONSULTATION__SERVER__ENVIRONMENT", "production"),
            ("CONSULTATION__CATALOG__PATH", "/srv/questions.yaml"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(Path::new("/srv/questions.yaml"))
        );
    }

    #[test]
    fn test_unparseable_port_fails_to_load() {
        let result = load_with(&[("CONSULTATION__SERVER__PORT", "eighty")]);
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_out_of_range_timeout_fails_validation() {
        let config = load_with(&[("CONSULTATION__SERVER__REQUEST_TIMEOUT_SECS", "0")]).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTimeout)
        ));
    }
}
