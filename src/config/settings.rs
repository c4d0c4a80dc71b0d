//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    CORS_ANY_ORIGIN, CORS_ORIGIN_SEPARATOR, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Cross-origin policy applied to every route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsPolicy {
    /// No CORS headers are emitted
    #[default]
    Disabled,
    /// Any origin is allowed
    AnyOrigin,
    /// Only the listed origins are allowed
    Origins(Vec<String>),
}

impl CorsPolicy {
    /// Parse a comma-separated origin list. `*` anywhere in it means any origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(CORS_ORIGIN_SEPARATOR)
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            CorsPolicy::Disabled
        } else if origins.iter().any(|origin| origin == CORS_ANY_ORIGIN) {
            CorsPolicy::AnyOrigin
        } else {
            CorsPolicy::Origins(origins)
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub cors: CorsPolicy,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors", &self.cors)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            cors: CorsPolicy::Disabled,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            cors: env::var("CORS_ALLOWED_ORIGINS")
                .map(|v| CorsPolicy::parse(&v))
                .unwrap_or_default(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_policy_parse() {
        assert_eq!(CorsPolicy::parse(""), CorsPolicy::Disabled);
        assert_eq!(CorsPolicy::parse(" , "), CorsPolicy::Disabled);
        assert_eq!(CorsPolicy::parse("*"), CorsPolicy::AnyOrigin);
        assert_eq!(
            CorsPolicy::parse("http://localhost:3000"),
            CorsPolicy::Origins(vec!["http://localhost:3000".to_string()])
        );
        assert_eq!(
            CorsPolicy::parse("http://a.test, http://b.test"),
            CorsPolicy::Origins(vec!["http://a.test".to_string(), "http://b.test".to_string()])
        );
        assert_eq!(CorsPolicy::parse("http://a.test,*"), CorsPolicy::AnyOrigin);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config {
            database_url: "postgres://admin:hunter2@db/app".to_string(),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_server_addr() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 9000,
            ..Config::default()
        };
        assert_eq!(config.server_addr(), "127.0.0.1:9000");
    }
}
