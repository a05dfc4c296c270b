//! Shipping and Tax Quote Model

use serde::{Deserialize, Serialize};

/// Point-in-time shipping/tax quote for a ZIP code and subtotal
///
/// The quote is a snapshot: it is not invalidated by later cart changes,
/// the consumer must request a new one after mutating the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingTaxInfo {
    pub zip_code: String,
    /// Two-letter state code resolved from the ZIP prefix
    pub state: String,
    /// Tax rate as a decimal fraction (e.g. 0.0725 for 7.25%)
    pub tax_rate: f64,
    pub shipping_cost: f64,
    /// Subtotal the quote was computed against
    pub subtotal: f64,
    pub tax_amount: f64,
    pub shipping_amount: f64,
    pub total: f64,
}

/// Quote payload (`POST /api/shipping/calculate`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateShippingTaxRequest {
    pub zip_code: String,
    pub subtotal: f64,
}
