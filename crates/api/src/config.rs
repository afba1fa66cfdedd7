use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;

/// Default connection string: a SQLite file in the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://orders.db";

/// A configuration value that could not be parsed.
#[derive(Debug, thiserror::Error)]
#[error("{var} has invalid value '{value}': {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Connection string for the backing store (default: [`DEFAULT_DATABASE_URL`]).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `db_uri`               | `sqlite://orders.db`       |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_var(&lookup, "HOST", "0.0.0.0")?;
        let port = parse_var(&lookup, "PORT", "8000")?;
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30")?;

        let database_url = lookup("db_uri").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.parse().map_err(|e: T::Err| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:8000");
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn db_uri_overrides_default_store() {
        let config = load(&[("db_uri", "sqlite:///var/lib/stockroom/orders.db")]).unwrap();
        assert_eq!(config.database_url, "sqlite:///var/lib/stockroom/orders.db");
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[(
            "CORS_ORIGINS",
            "http://a.example, http://b.example ,,",
        )])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert_matches!(err, ConfigError { var: "PORT", .. });
        assert_eq!(err.value, "eighty");
    }

    #[test]
    fn invalid_host_is_reported() {
        let err = load(&[("HOST", "not-an-ip")]).unwrap_err();
        assert_eq!(err.var, "HOST");
    }
}
