//! Local persistence
//!
//! File-backed key/value store standing in for the browser's local storage:
//! one JSON file per key under a base directory. Used for the bearer token
//! and the guest cart. Writes are unconditional full overwrites; there is
//! no cross-process locking.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use shared::models::GuestCartItem;

use crate::error::StorageError;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "voyager_auth_token";

/// Storage key for the guest cart
pub const GUEST_CART_KEY: &str = "voyager_guest_cart";

/// One-JSON-file-per-key store
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`
    pub fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Ensure the base directory exists
    fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Persist `value` under `key`, replacing any previous content
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(key), json)?;
        Ok(())
    }

    /// Load the value stored under `key`, or `None` when absent or unreadable
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.path(key);
        if !path.exists() {
            return None;
        }
        let json = fs::read_to_string(&path).ok()?;
        serde_json::from_str(&json).ok()
    }

    /// Check whether `key` has a stored value
    pub fn exists(&self, key: &str) -> bool {
        self.path(key).exists()
    }

    /// Delete the value stored under `key`
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// Base directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Guest cart persistence on top of [`LocalStore`]
#[derive(Debug, Clone)]
pub struct GuestCartStore {
    store: LocalStore,
}

impl GuestCartStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: LocalStore::new(dir),
        }
    }

    /// Persist the full guest item list
    pub fn save(&self, items: &[GuestCartItem]) -> Result<(), StorageError> {
        self.store.save(GUEST_CART_KEY, &items)
    }

    /// Load the guest item list, empty when nothing is stored
    pub fn load(&self) -> Vec<GuestCartItem> {
        self.store.load(GUEST_CART_KEY).unwrap_or_default()
    }

    /// Drop the stored guest cart
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.delete(GUEST_CART_KEY)
    }

    pub fn exists(&self) -> bool {
        self.store.exists(GUEST_CART_KEY)
    }
}

/// Bearer token persistence on top of [`LocalStore`]
#[derive(Debug, Clone)]
pub struct TokenStore {
    store: LocalStore,
}

impl TokenStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            store: LocalStore::new(dir),
        }
    }

    pub fn save(&self, token: &str) -> Result<(), StorageError> {
        self.store.save(TOKEN_KEY, &token)
    }

    pub fn load(&self) -> Option<String> {
        self.store.load(TOKEN_KEY)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.delete(TOKEN_KEY)
    }
}
