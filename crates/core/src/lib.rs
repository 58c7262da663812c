//! FastBite Core - Shared types library.
//!
//! This crate provides common types used across all FastBite components:
//! - `storefront` - Client-side storefront interaction library
//! - `cli` - Interactive command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Prices, email addresses, and access tokens

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
