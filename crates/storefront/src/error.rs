//! Unified error type for the storefront library.
//!
//! Flows that end in a toast (checkout, auth, contact) still return their
//! failure so callers can branch on it; `AppError` is the aggregate those
//! flows and the constructors funnel into.

use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// API request failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Sign-up form email rejected locally.
    #[error("{0}")]
    Email(#[from] fastbite_core::EmailError),

    /// Sign-up password and confirmation differ.
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_their_user_facing_text() {
        assert_eq!(
            AppError::PasswordMismatch.to_string(),
            "Passwords do not match."
        );

        let err = AppError::Api(ApiError::Server {
            status: 401,
            message: "Login failed".into(),
        });
        assert_eq!(err.to_string(), "API error: server error: 401 - Login failed");
    }
}
