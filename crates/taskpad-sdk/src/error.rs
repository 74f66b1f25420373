// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for taskpad-sdk.

use thiserror::Error;

/// Result type using SdkError.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors that can occur when using the SDK.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Configuration error (invalid base URL or client setup).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, timeout, bad body).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The referenced todo or note does not exist (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The server rejected the request shape (422).
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other non-2xx response.
    #[error("server error [{status}]: {message}")]
    Server {
        /// HTTP status code of the response.
        status: u16,
        /// Message from the error body, or a placeholder when absent.
        message: String,
    },
}

impl SdkError {
    /// True for a 404 outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::NotFound(_))
    }

    /// True for a 422 outcome.
    pub fn is_validation(&self) -> bool {
        matches!(self, SdkError::Validation(_))
    }
}

impl From<url::ParseError> for SdkError {
    fn from(err: url::ParseError) -> Self {
        SdkError::Config(err.to_string())
    }
}
