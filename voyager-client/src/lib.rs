//! Voyager Client - cart and checkout SDK for the Voyager storefront
//!
//! Renders nothing and stores nothing authoritative: state mutation is
//! delegated to the storefront API, the guest cart lives in a local
//! key/value store until login, and pricing is derived on every read.

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod pricing;
pub mod storage;
pub mod validation;

pub use api::StorefrontApi;
pub use cart::CartSession;
pub use checkout::{CheckoutState, CheckoutStep, CheckoutUpdate, CheckoutWizard};
pub use config::ClientConfig;
pub use error::{CheckoutError, CheckoutResult, ClientError, ClientResult, StorageError};
pub use http::HttpClient;
pub use pricing::{CartTotals, FREE_SHIPPING_THRESHOLD};
pub use storage::{GuestCartStore, LocalStore, TokenStore, GUEST_CART_KEY, TOKEN_KEY};

// Re-export shared types for convenience
pub use shared::models::{
    Cart, CartItem, CartLine, GuestCartItem, Order, PromoCode, SavedItem, ShippingTaxInfo,
};
