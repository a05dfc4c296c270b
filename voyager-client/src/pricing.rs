//! Pricing Calculator
//!
//! Pure functions deriving display values from cart state. Uses
//! rust_decimal for the arithmetic, returns f64 to match the wire types.

use rust_decimal::prelude::*;

use shared::models::{CartLine, PromoCode, ShippingTaxInfo};

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Subtotal at which shipping becomes free
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for display, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Total number of units across all lines
pub fn item_count(lines: &[CartLine]) -> i64 {
    lines.iter().map(CartLine::quantity).sum()
}

/// Sum of `price * quantity` across lines
///
/// Lines whose product has not been hydrated contribute zero; they carry no
/// price to sum.
pub fn subtotal(lines: &[CartLine]) -> f64 {
    let total: Decimal = lines
        .iter()
        .filter_map(|line| {
            line.product()
                .map(|p| to_decimal(p.price) * Decimal::from(line.quantity()))
        })
        .sum();
    to_f64(total)
}

/// Discount contributed by a promo code
///
/// Absent or invalid codes contribute zero.
pub fn discount_amount(subtotal: f64, promo: Option<&PromoCode>) -> f64 {
    match promo {
        Some(code) if code.is_valid => {
            let amount =
                to_decimal(subtotal) * to_decimal(code.discount_percentage) / Decimal::ONE_HUNDRED;
            to_f64(amount)
        }
        _ => 0.0,
    }
}

/// Order total for display
///
/// With a shipping/tax quote the quote's total is authoritative. Without
/// one, shipping and tax are omitted entirely rather than estimated - the
/// UI must tell the shopper they are calculated later.
pub fn order_total(subtotal: f64, discount: f64, quote: Option<&ShippingTaxInfo>) -> f64 {
    match quote {
        Some(q) => q.total,
        None => to_f64(to_decimal(subtotal) - to_decimal(discount)),
    }
}

/// Progress toward free shipping as a percentage, clamped to 100
pub fn free_shipping_progress(subtotal: f64) -> f64 {
    let pct = to_decimal(subtotal) / to_decimal(FREE_SHIPPING_THRESHOLD) * Decimal::ONE_HUNDRED;
    to_f64(pct.min(Decimal::ONE_HUNDRED))
}

/// Amount still to spend before shipping is free, zero once reached
pub fn amount_to_free_shipping(subtotal: f64) -> f64 {
    let remaining = to_decimal(FREE_SHIPPING_THRESHOLD) - to_decimal(subtotal);
    to_f64(remaining.max(Decimal::ZERO))
}

/// All derived pricing values for one render of the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    pub item_count: i64,
    pub subtotal: f64,
    pub discount: f64,
    pub total: f64,
    pub free_shipping_progress: f64,
    pub amount_to_free_shipping: f64,
}

impl CartTotals {
    pub fn compute(
        lines: &[CartLine],
        promo: Option<&PromoCode>,
        quote: Option<&ShippingTaxInfo>,
    ) -> Self {
        let subtotal = subtotal(lines);
        let discount = discount_amount(subtotal, promo);
        Self {
            item_count: item_count(lines),
            subtotal,
            discount,
            total: order_total(subtotal, discount, quote),
            free_shipping_progress: free_shipping_progress(subtotal),
            amount_to_free_shipping: amount_to_free_shipping(subtotal),
        }
    }
}
