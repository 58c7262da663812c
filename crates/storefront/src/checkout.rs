//! Checkout flow types.
//!
//! The flow itself is driven by [`crate::session::StorefrontSession::checkout`];
//! this module holds its state machine, the delivery-details validation, and
//! the tagged failure type every rejection funnels into.

use crate::api::ApiError;

/// Where the UI should send an unauthenticated user who tries to check out.
pub const AUTH_PAGE: &str = "auth.html";

/// Checkout state machine.
///
/// `Idle -> Validating -> Submitting -> {Success, Failed}`. Terminal states
/// stay set until the next checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// No checkout attempted yet (or the last one was fully handled).
    #[default]
    Idle,
    /// Local guards running; no request issued yet.
    Validating,
    /// Order request in flight.
    Submitting,
    /// Order accepted; cart cleared.
    Success,
    /// Checkout rejected locally or by the server; cart preserved.
    Failed,
}

/// Delivery details from the order form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryDetails {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment: String,
}

impl DeliveryDetails {
    /// Whether every field is non-blank after trimming.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.address, &self.payment]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

/// Why a checkout attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutErrorKind {
    /// Nothing in the cart.
    EmptyCart,
    /// Order form present but incomplete.
    MissingDetails,
    /// No stored access token.
    NotSignedIn,
    /// A previous submission is still awaiting its response.
    Busy,
    /// Server answered with a non-success status.
    Server,
    /// Request never completed.
    Network,
}

/// A failed checkout attempt.
///
/// Carries the user-facing message (already surfaced as a toast by the
/// session) and, when recovery requires navigation, a redirect target.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct CheckoutError {
    pub kind: CheckoutErrorKind,
    pub message: String,
    pub redirect: Option<&'static str>,
}

impl CheckoutError {
    fn new(kind: CheckoutErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            redirect: None,
        }
    }

    pub(crate) fn empty_cart() -> Self {
        Self::new(CheckoutErrorKind::EmptyCart, "Your cart is empty.")
    }

    pub(crate) fn missing_details() -> Self {
        Self::new(
            CheckoutErrorKind::MissingDetails,
            "Please fill in your delivery details.",
        )
    }

    pub(crate) fn not_signed_in() -> Self {
        Self {
            redirect: Some(AUTH_PAGE),
            ..Self::new(
                CheckoutErrorKind::NotSignedIn,
                "Please sign in to place your order.",
            )
        }
    }

    pub(crate) fn busy() -> Self {
        Self::new(
            CheckoutErrorKind::Busy,
            "Your order is already being placed.",
        )
    }

    /// Map an API failure onto the checkout taxonomy: structured server
    /// rejections keep their message, everything else is a generic network
    /// failure.
    pub(crate) fn from_api(err: &ApiError) -> Self {
        match err {
            ApiError::Server { message, .. } => {
                Self::new(CheckoutErrorKind::Server, message.clone())
            }
            ApiError::Http(_) | ApiError::BaseUrl(_) => Self::new(
                CheckoutErrorKind::Network,
                "Network error. Please try again.",
            ),
        }
    }
}
