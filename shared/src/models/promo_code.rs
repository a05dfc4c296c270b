//! Promo Code Model

use serde::{Deserialize, Serialize};

/// Validation result for a discount code
///
/// Validity is decided server-side. A code with `is_valid == false` still
/// carries the server's message (expired, usage limit, unknown) so it can be
/// shown to the shopper, but it contributes zero discount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoCode {
    pub code: String,
    /// Percentage off subtotal (e.g. 20.0 = 20%)
    pub discount_percentage: f64,
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Validate payload (`POST /api/promo-codes/validate`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatePromoCodeRequest {
    pub code: String,
}
