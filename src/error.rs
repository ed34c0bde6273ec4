// SPDX-License-Identifier: MIT
// Copyright 2026 The Twotoo Authors

//! Application error types shared by every layer of the client.

use reqwest::StatusCode;

/// Application error type returned by repositories and view models.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Twotoo API error: {0}")]
    Api(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Map a non-success HTTP status (and its body) to an error.
    pub fn from_status(status: StatusCode, body: &str) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Unauthorized,
            StatusCode::NOT_FOUND => AppError::NotFound(body_or_status(status, body)),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                AppError::BadRequest(body_or_status(status, body))
            }
            _ => AppError::Api(format!("HTTP {}: {}", status, body)),
        }
    }

    /// Returns true if the access token was rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, AppError::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

fn body_or_status(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        status.to_string()
    } else {
        body.to_string()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Api(format!("JSON parse error: {}", err))
        } else {
            AppError::Api(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::BadRequest(errors.to_string())
    }
}

/// Result type alias used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;
