//! Shared types for the Voyager storefront
//!
//! Data models and API payload types used by the client SDK and any
//! server-side consumer. Pure types plus serde, no IO.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AddToCartRequest, Address, CalculateShippingTaxRequest, Cart, CartItem, CartLine,
    CheckoutRequest, CheckoutResponse, GuestCartItem, GuestCartMergeRequest, Order, OrderItem,
    OrderStatus, Product, PromoCode, SavedItem, ShippingTaxInfo, UpdateCartItemRequest,
    ValidatePromoCodeRequest,
};
