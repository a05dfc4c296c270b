//! Cart Models
//!
//! Authenticated carts are owned by the backend: every mutation returns the
//! full updated cart and the client replaces its copy wholesale. Guest carts
//! are owned by the client and persisted locally until login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::Product;

/// Line in an authenticated cart. Identity is the server-assigned row `id`,
/// distinct from `product_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub product: Option<Product>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Line moved out of the active cart ("save for later"). An item is either
/// active or saved, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedItem {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub product: Option<Product>,
    pub created_at: DateTime<Utc>,
}

/// Authenticated cart aggregate. `product_id` values are unique across
/// `items`; the backend coalesces duplicate adds into one line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub saved_items: Vec<SavedItem>,
}

/// Line in an unauthenticated visitor's cart. Identity is `product_id`.
///
/// `product` is in-memory only, hydrated from the catalog for display;
/// the persisted and wire shape is exactly `{product_id, quantity}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuestCartItem {
    pub product_id: i64,
    pub quantity: i64,
    #[serde(skip)]
    pub product: Option<Product>,
}

impl GuestCartItem {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
            product: None,
        }
    }
}

/// Unified view over the two cart representations.
///
/// Pricing and display consume this tag instead of probing item shapes, so
/// the two line types never mix structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum CartLine {
    Authenticated(CartItem),
    Guest(GuestCartItem),
}

impl CartLine {
    pub fn product_id(&self) -> i64 {
        match self {
            Self::Authenticated(item) => item.product_id,
            Self::Guest(item) => item.product_id,
        }
    }

    pub fn quantity(&self) -> i64 {
        match self {
            Self::Authenticated(item) => item.quantity,
            Self::Guest(item) => item.quantity,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Authenticated(item) => item.product.as_ref(),
            Self::Guest(item) => item.product.as_ref(),
        }
    }
}

// ==================== Request payloads ====================

/// Add item payload (`POST /api/cart/items`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: i64,
}

/// Update quantity payload (`PUT /api/cart/items/{id}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

/// Merge payload (`POST /api/cart/merge`) - the full guest item list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestCartMergeRequest {
    pub items: Vec<GuestCartItem>,
}
