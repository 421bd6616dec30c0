use crate::auth::jwt::{JwtConfig, DEFAULT_ACCESS_EXPIRY_MINS};

/// Failure to build a [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Where section content is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL through [`harva_db::store::PgStore`].
    Postgres { database_url: String },
    /// Process-local [`harva_db::store::MemoryStore`]. Content is lost on exit.
    Memory,
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Postgres { .. } => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Credentials for the admin account created at startup if it is missing.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

/// Server configuration loaded from environment variables.
///
/// Everything except the JWT secret (and the database URL for the postgres
/// backend) has a default suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    pub store_backend: StoreBackend,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    pub admin: Option<AdminBootstrap>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`  | `30`                       |
    /// | `STORE_BACKEND`          | `postgres`                 |
    /// | `DATABASE_URL`           | required for `postgres`    |
    /// | `JWT_SECRET`             | required                   |
    /// | `JWT_ACCESS_EXPIRY_MINS` | `60`                       |
    /// | `ADMIN_EMAIL`            | unset                      |
    /// | `ADMIN_PASSWORD`         | unset                      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or("PORT", var("PORT"), 3000)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 =
            parse_or("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30)?;
        let shutdown_timeout_secs: u64 =
            parse_or("SHUTDOWN_TIMEOUT_SECS", var("SHUTDOWN_TIMEOUT_SECS"), 30)?;

        let store_backend = match var("STORE_BACKEND").as_deref() {
            None | Some("postgres") => StoreBackend::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "STORE_BACKEND",
                    value: other.to_string(),
                    reason: "expected 'postgres' or 'memory'".into(),
                })
            }
        };

        let jwt = JwtConfig {
            secret: var("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            access_token_expiry_mins: parse_or(
                "JWT_ACCESS_EXPIRY_MINS",
                var("JWT_ACCESS_EXPIRY_MINS"),
                DEFAULT_ACCESS_EXPIRY_MINS,
            )?,
        };
        if jwt.access_token_expiry_mins <= 0 {
            return Err(ConfigError::Invalid {
                var: "JWT_ACCESS_EXPIRY_MINS",
                value: jwt.access_token_expiry_mins.to_string(),
                reason: "must be positive".into(),
            });
        }

        let admin = match (var("ADMIN_EMAIL"), var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => return Err(ConfigError::Missing("ADMIN_EMAIL")),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            store_backend,
            jwt,
            admin,
        })
    }
}

fn parse_or<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[
            ("DATABASE_URL", "postgres://localhost/harva"),
            ("JWT_SECRET", "s3cret"),
        ])
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.jwt.access_token_expiry_mins, 60);
        assert_eq!(config.store_backend.name(), "postgres");
        assert!(config.admin.is_none());
    }

    #[test]
    fn test_memory_backend_needs_no_database_url() {
        let config = load(&[("STORE_BACKEND", "memory"), ("JWT_SECRET", "s3cret")]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
    }

    #[test]
    fn test_missing_required_values() {
        assert_matches!(
            load(&[("JWT_SECRET", "s3cret")]),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
        assert_matches!(
            load(&[("STORE_BACKEND", "memory")]),
            Err(ConfigError::Missing("JWT_SECRET"))
        );
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert_matches!(
            load(&[("STORE_BACKEND", "memory"), ("JWT_SECRET", "x"), ("PORT", "http")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        );
        assert_matches!(
            load(&[("STORE_BACKEND", "sqlite"), ("JWT_SECRET", "x")]),
            Err(ConfigError::Invalid { var: "STORE_BACKEND", .. })
        );
        assert_matches!(
            load(&[
                ("STORE_BACKEND", "memory"),
                ("JWT_SECRET", "x"),
                ("JWT_ACCESS_EXPIRY_MINS", "0"),
            ]),
            Err(ConfigError::Invalid { var: "JWT_ACCESS_EXPIRY_MINS", .. })
        );
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("STORE_BACKEND", "memory"),
            ("JWT_SECRET", "x"),
            ("CORS_ORIGINS", "https://a.test, https://b.test,,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["https://a.test", "https://b.test"]);
    }

    #[test]
    fn test_admin_bootstrap_needs_both_values() {
        let base = [("STORE_BACKEND", "memory"), ("JWT_SECRET", "x")];

        let config = load(&[
            base[0],
            base[1],
            ("ADMIN_EMAIL", "a@harva.test"),
            ("ADMIN_PASSWORD", "pw123456"),
        ])
        .unwrap();
        assert_eq!(config.admin.unwrap().email, "a@harva.test");

        assert_matches!(
            load(&[base[0], base[1], ("ADMIN_EMAIL", "a@harva.test")]),
            Err(ConfigError::Missing("ADMIN_PASSWORD"))
        );
    }
}
