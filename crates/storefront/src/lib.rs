//! FastBite Storefront - client-side interaction library.
//!
//! This crate is the core behind the FastBite ordering front ends. It owns
//! the cart, mirrors it into a local persistent store, projects it into
//! display rows, and drives the checkout, auth, and contact flows against
//! the FastBite API.
//!
//! # Architecture
//!
//! - [`session::StorefrontSession`] is the single owner of in-memory state
//! - [`store::LocalStore`] is a durable mirror, written after every mutation
//! - [`view`] emits plain row descriptors; concrete UI bindings stay outside
//! - [`notify::Notifier`] is the transient-notification (toast) seam
//!
//! Everything runs single-threaded and event-driven: mutations run to
//! completion, network calls are the only suspension points, and no locking
//! is used or needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod session;
pub mod store;
pub mod view;
