// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! SDK configuration for connecting to taskpad-server.

use std::env;

/// SDK configuration for connecting to taskpad-server.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Server base URL without the API prefix (default: "http://127.0.0.1:8080")
    pub base_url: String,
    /// API mount prefix on the server (default: "/api")
    pub api_prefix: String,
    /// Connection timeout in milliseconds (default: 10_000)
    pub connect_timeout_ms: u64,
    /// Request timeout in milliseconds (default: 30_000)
    pub request_timeout_ms: u64,
}

impl SdkConfig {
    /// Create a configuration for the given server base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: "/api".to_string(),
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Optional Environment Variables
    /// - `TASKPAD_SERVER_URL` - Server base URL (default: "http://127.0.0.1:8080")
    /// - `TASKPAD_API_PREFIX` - API mount prefix (default: "/api")
    /// - `TASKPAD_CONNECT_TIMEOUT_MS` - Connection timeout (default: 10000)
    /// - `TASKPAD_REQUEST_TIMEOUT_MS` - Request timeout (default: 30000)
    pub fn from_env() -> Self {
        let base_url =
            env::var("TASKPAD_SERVER_URL").unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let api_prefix = env::var("TASKPAD_API_PREFIX").unwrap_or_else(|_| "/api".to_string());

        let connect_timeout_ms = env::var("TASKPAD_CONNECT_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        let request_timeout_ms = env::var("TASKPAD_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30_000);

        Self {
            base_url,
            api_prefix,
            connect_timeout_ms,
            request_timeout_ms,
        }
    }

    /// Create a configuration for local development.
    pub fn localhost() -> Self {
        Self::new("http://127.0.0.1:8080")
    }

    /// Set the server base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API mount prefix.
    pub fn with_api_prefix(mut self, api_prefix: impl Into<String>) -> Self {
        self.api_prefix = api_prefix.into();
        self
    }

    /// Set the connection timeout in milliseconds.
    pub fn with_connect_timeout_ms(mut self, ms: u64) -> Self {
        self.connect_timeout_ms = ms;
        self
    }

    /// Set the request timeout in milliseconds.
    pub fn with_request_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    /// Root URL for API routes: base URL joined with the prefix,
    /// without a trailing slash.
    pub fn api_root(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let prefix = self.api_prefix.trim_matches('/');
        if prefix.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{prefix}")
        }
    }
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self::localhost()
    }
}
