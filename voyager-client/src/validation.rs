//! Input validation helpers
//!
//! Centralized field checks for the checkout forms. Validation here is
//! local and per-step; the backend re-validates everything on submission.

use shared::models::Address;

use crate::error::{CheckoutError, CheckoutResult};

// ── Text length limits ──────────────────────────────────────────────

/// Name fields (first/last)
pub const MAX_NAME_LEN: usize = 100;

/// Street address lines and city
pub const MAX_ADDRESS_LEN: usize = 200;

/// Gift message
pub const MAX_GIFT_MESSAGE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: impl Into<String>,
    max_len: usize,
) -> CheckoutResult<()> {
    let field = field.into();
    if value.trim().is_empty() {
        return Err(CheckoutError::MissingField { field });
    }
    if value.len() > max_len {
        return Err(CheckoutError::InvalidField {
            field,
            reason: format!("too long ({} chars, max {})", value.len(), max_len),
        });
    }
    Ok(())
}

/// Validate a two-letter state code.
pub fn validate_state_code(value: &str, field: impl Into<String>) -> CheckoutResult<()> {
    let field = field.into();
    if value.trim().is_empty() {
        return Err(CheckoutError::MissingField { field });
    }
    if value.len() != 2 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CheckoutError::InvalidField {
            field,
            reason: "expected a two-letter state code".to_string(),
        });
    }
    Ok(())
}

/// Validate a ZIP code: at least five digits, ignoring an optional +4 part.
pub fn validate_zip_code(value: &str, field: impl Into<String>) -> CheckoutResult<()> {
    let field = field.into();
    if value.trim().is_empty() {
        return Err(CheckoutError::MissingField { field });
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 5 {
        return Err(CheckoutError::InvalidField {
            field,
            reason: "ZIP code must be at least 5 digits".to_string(),
        });
    }
    Ok(())
}

/// Validate every required field of an address form.
///
/// `prefix` distinguishes the shipping and billing forms in messages.
pub fn validate_address(address: &Address, prefix: &str) -> CheckoutResult<()> {
    validate_required_text(
        &address.first_name,
        format!("{} first name", prefix),
        MAX_NAME_LEN,
    )?;
    validate_required_text(
        &address.last_name,
        format!("{} last name", prefix),
        MAX_NAME_LEN,
    )?;
    validate_required_text(
        &address.address_line1,
        format!("{} street address", prefix),
        MAX_ADDRESS_LEN,
    )?;
    validate_required_text(&address.city, format!("{} city", prefix), MAX_ADDRESS_LEN)?;
    validate_state_code(&address.state, format!("{} state", prefix))?;
    validate_zip_code(&address.zip_code, format!("{} ZIP code", prefix))?;
    validate_required_text(
        &address.country,
        format!("{} country", prefix),
        MAX_ADDRESS_LEN,
    )?;
    Ok(())
}
