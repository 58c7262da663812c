//! Core types for FastBite.
//!
//! Type-safe wrappers for the domain concepts the storefront passes around.

pub mod email;
pub mod price;
pub mod token;

pub use email::{Email, EmailError};
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use token::AccessToken;
