//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity as hydrated by the backend onto cart lines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in currency units
    pub price: f64,
    pub image_url: Option<String>,
    pub category: Option<String>,
    /// Units currently available; the backend rejects or caps quantities
    /// above this on every mutation
    pub stock: i64,
}
