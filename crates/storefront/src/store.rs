//! Local persistent store.
//!
//! The browser-localStorage analog: one file per fixed key under a data
//! directory. The store is a durable mirror of the session's in-memory
//! state and never a source of truth mid-session, so every failure here is
//! soft - reads degrade to "empty", writes are logged and swallowed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fastbite_core::AccessToken;

use crate::cart::Cart;

/// Fixed keys the storefront persists under.
pub mod storage_keys {
    /// Serialized cart list.
    pub const CART: &str = "fastbite-cart";
    /// Opaque access token.
    pub const TOKEN: &str = "fastbite-token";
}

/// File-backed key-value store for a single browser-session equivalent.
///
/// Not synchronized across concurrent processes; two sessions over the
/// same directory may diverge silently, like two browser tabs sharing
/// localStorage.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open a store rooted at `dir`. The directory is created on first
    /// write, not here.
    #[must_use]
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the persisted cart.
    ///
    /// A missing file or a corrupt payload yields an empty cart, never an
    /// error; missing quantities are normalized to 1 by the cart's serde
    /// defaults.
    #[must_use]
    pub fn load_cart(&self) -> Cart {
        let Some(raw) = self.read(storage_keys::CART) else {
            return Cart::new();
        };
        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(err) => {
                tracing::warn!(key = storage_keys::CART, %err, "discarding corrupt cart");
                Cart::new()
            }
        }
    }

    /// Persist the full cart, replacing whatever was stored.
    ///
    /// Write failures (quota, permissions, missing volume) are swallowed;
    /// the in-memory cart stays authoritative for the session.
    pub fn save_cart(&self, cart: &Cart) {
        match serde_json::to_string(cart) {
            Ok(raw) => self.write(storage_keys::CART, &raw),
            Err(err) => {
                tracing::warn!(key = storage_keys::CART, %err, "cart not serializable");
            }
        }
    }

    /// Load the stored access token, if any.
    #[must_use]
    pub fn load_token(&self) -> Option<AccessToken> {
        let raw = self.read(storage_keys::TOKEN)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(AccessToken::new(trimmed))
        }
    }

    /// Persist the access token.
    pub fn save_token(&self, token: &AccessToken) {
        self.write(storage_keys::TOKEN, token.expose());
    }

    /// Forget the stored access token.
    pub fn clear_token(&self) {
        let path = self.path_for(storage_keys::TOKEN);
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != io::ErrorKind::NotFound {
                tracing::warn!(key = storage_keys::TOKEN, %err, "failed to clear token");
            }
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Some(raw),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(key, %err, "failed to read store entry");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(err) = fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(self.path_for(key), value))
        {
            tracing::warn!(key, %err, "failed to write store entry");
        }
    }
}
