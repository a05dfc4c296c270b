//! Order Model
//!
//! Orders are created exactly once per successful checkout and never
//! mutated by the client afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;

/// Order fulfillment status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

/// Line item with price and quantity frozen at checkout time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    /// Unit price at the time the order was placed
    pub product_price: f64,
    pub quantity: i64,
    /// `product_price * quantity`, frozen
    pub subtotal: f64,
    pub created_at: DateTime<Utc>,
}

/// Completed order record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub status: OrderStatus,
    /// Address snapshots taken at submission
    pub shipping_address: Address,
    pub billing_address: Address,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub subtotal: f64,
    pub discount_amount: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub total: f64,
    // Gift metadata
    pub is_gift: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift_message: Option<String>,
    #[serde(default)]
    pub gift_wrap: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
    pub created_at: DateTime<Utc>,
}
