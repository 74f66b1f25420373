// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for taskpad-server.

use std::net::SocketAddr;

/// Browser origins allowed by default (local React/Vite dev servers).
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// HTTP listen address.
    pub http_addr: SocketAddr,
    /// Mount prefix for API routes (normalized, e.g. `/api`).
    pub api_prefix: String,
    /// Browser origins allowed by the CORS layer.
    pub cors_origins: Vec<String>,
    /// Connection pool size.
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("TASKPAD_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map_err(|_| ConfigError::MissingEnvVar("TASKPAD_DATABASE_URL or DATABASE_URL"))?;

        let port: u16 = std::env::var("TASKPAD_HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let http_addr = SocketAddr::from(([0, 0, 0, 0], port));

        let api_prefix = normalize_prefix(
            &std::env::var("TASKPAD_API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        );

        let cors_origins = parse_origins(
            &std::env::var("TASKPAD_CORS_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
        );

        let db_max_connections = std::env::var("TASKPAD_DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            database_url,
            http_addr,
            api_prefix,
            cors_origins,
            db_max_connections,
        })
    }
}

/// Normalize an API prefix to a single leading slash and no trailing slash.
pub fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Split a comma-separated origin list, dropping empty entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),
    /// The port number is invalid.
    #[error("Invalid port number")]
    InvalidPort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix("/api"), "/api");
        assert_eq!(normalize_prefix("api"), "/api");
        assert_eq!(normalize_prefix("/api/"), "/api");
        assert_eq!(normalize_prefix(" /v1 "), "/v1");
        assert_eq!(normalize_prefix(""), "/");
        assert_eq!(normalize_prefix("/"), "/");
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://localhost:3000, http://localhost:5173,");

        assert_eq!(
            origins,
            vec!["http://localhost:3000", "http://localhost:5173"]
        );
    }

    #[test]
    fn test_parse_origins_empty() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_default_origins_cover_dev_servers() {
        let origins = parse_origins(DEFAULT_CORS_ORIGINS);

        assert_eq!(origins.len(), 2);
        assert!(origins.iter().all(|o| o.starts_with("http://localhost:")));
    }
}
