//! FastBite API client.
//!
//! Thin REST client over `reqwest` for the endpoints the storefront talks
//! to: order creation, sign-in/sign-up, and contact messages. Server error
//! bodies come in two known shapes - a single `error` string or an `errors`
//! array of `{ msg }` objects - and both are parsed into
//! [`ApiError::Server`] with `error` taking precedence.

use fastbite_core::{AccessToken, Email};
use reqwest::header;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Errors from talking to the FastBite API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never completed (DNS, refused connection, dropped socket).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("server error: {status} - {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Extracted server message, or the per-endpoint fallback.
        message: String,
    },

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("invalid API URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}

/// One item of an order submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
struct OrderRequest<'a> {
    items: &'a [OrderItem],
}

/// Response of a successful sign-in or sign-up.
///
/// The token is optional because the server may omit it (e.g. accounts that
/// need verification); callers only store it when present.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Contact form payload.
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Trim every field, mirroring what the form layer did in the browser.
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Client for the FastBite REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client against `base_url` (scheme + host, no `/api` suffix).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(base_url: Url) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client, base_url })
    }

    /// Submit the cart as an order.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] on a non-2xx response (message extracted from
    /// the body when present, else "Failed to place order"),
    /// [`ApiError::Http`] when the request never completes.
    pub async fn create_order(
        &self,
        token: &AccessToken,
        items: &[OrderItem],
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("api/orders")?)
            .header(header::AUTHORIZATION, token.bearer())
            .json(&OrderRequest { items })
            .send()
            .await?;
        Self::expect_success(response, "Failed to place order").await
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] on rejection (fallback message "Login failed"),
    /// [`ApiError::Http`] on transport failure.
    pub async fn login(&self, email: &Email, password: &str) -> Result<AuthResponse, ApiError> {
        self.auth(
            "api/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
            "Login failed",
        )
        .await
    }

    /// Create an account.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] on rejection (fallback message "Sign up failed"),
    /// [`ApiError::Http`] on transport failure.
    pub async fn signup(
        &self,
        name: &str,
        email: &Email,
        password: &str,
    ) -> Result<AuthResponse, ApiError> {
        self.auth(
            "api/auth/signup",
            &serde_json::json!({ "name": name, "email": email, "password": password }),
            "Sign up failed",
        )
        .await
    }

    /// Send a contact message. The bearer header is attached only when a
    /// token is available.
    ///
    /// # Errors
    ///
    /// [`ApiError::Server`] on rejection (fallback message "Failed to send
    /// message"), [`ApiError::Http`] on transport failure.
    pub async fn send_message(
        &self,
        token: Option<&AccessToken>,
        message: &ContactMessage,
    ) -> Result<(), ApiError> {
        let mut request = self.client.post(self.endpoint("api/messages")?).json(message);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, token.bearer());
        }
        Self::expect_success(request.send().await?, "Failed to send message").await
    }

    async fn auth(
        &self,
        path: &str,
        payload: &serde_json::Value,
        fallback: &str,
    ) -> Result<AuthResponse, ApiError> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::server_error(response, fallback).await);
        }

        // A 2xx body without a token is still a success.
        Ok(response
            .json::<AuthResponse>()
            .await
            .unwrap_or(AuthResponse { token: None }))
    }

    async fn expect_success(response: reqwest::Response, fallback: &str) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::server_error(response, fallback).await)
        }
    }

    async fn server_error(response: reqwest::Response, fallback: &str) -> ApiError {
        let status = response.status().as_u16();
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        ApiError::Server {
            status,
            message: body.into_message(fallback),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }
}

/// The two error-body shapes the server is known to produce.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    errors: Option<Vec<FieldError>>,
}

#[derive(Debug, Default, Deserialize)]
struct FieldError {
    msg: Option<String>,
}

impl ErrorBody {
    /// Extract the first available message: `error`, then `errors[0].msg`,
    /// then the caller's fallback.
    fn into_message(self, fallback: &str) -> String {
        if let Some(error) = self.error {
            if !error.is_empty() {
                return error;
            }
        }
        if let Some(msg) = self
            .errors
            .and_then(|errors| errors.into_iter().next())
            .and_then(|first| first.msg)
        {
            if !msg.is_empty() {
                return msg;
            }
        }
        fallback.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> String {
        serde_json::from_str::<ErrorBody>(raw)
            .unwrap_or_default()
            .into_message("generic")
    }

    #[test]
    fn prefers_the_single_error_field() {
        assert_eq!(
            extract(r#"{"error":"Kitchen closed","errors":[{"msg":"ignored"}]}"#),
            "Kitchen closed"
        );
    }

    #[test]
    fn falls_back_to_first_errors_entry_msg() {
        assert_eq!(
            extract(r#"{"errors":[{"msg":"Phone is required"},{"msg":"second"}]}"#),
            "Phone is required"
        );
    }

    #[test]
    fn unusable_bodies_degrade_to_the_fallback() {
        assert_eq!(extract(r"{}"), "generic");
        assert_eq!(extract(r#"{"errors":[]}"#), "generic");
        assert_eq!(extract(r#"{"errors":[{"param":"phone"}]}"#), "generic");
        assert_eq!(extract(r#"{"error":""}"#), "generic");
        assert_eq!(extract("not json at all"), "generic");
    }

    #[test]
    fn order_request_serializes_to_the_wire_shape() {
        let items = [OrderItem {
            name: "Burger".into(),
            quantity: 2,
            price: rust_decimal::dec!(5.5),
        }];
        let json = serde_json::to_string(&OrderRequest { items: &items }).expect("serializable");
        assert_eq!(
            json,
            r#"{"items":[{"name":"Burger","quantity":2,"price":5.5}]}"#
        );
    }

    #[test]
    fn contact_message_trims_every_field() {
        let message = ContactMessage {
            name: "  Asha ".into(),
            email: " asha@example.com ".into(),
            subject: " Feedback ".into(),
            message: " Great dosa. ".into(),
        }
        .trimmed();

        assert_eq!(message.name, "Asha");
        assert_eq!(message.email, "asha@example.com");
        assert_eq!(message.subject, "Feedback");
        assert_eq!(message.message, "Great dosa.");
    }
}
