//! Address Model

use serde::{Deserialize, Serialize};

/// Postal address collected by the checkout forms
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    pub first_name: String,
    pub last_name: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    /// Two-letter state code
    pub state: String,
    pub zip_code: String,
    pub country: String,
}
