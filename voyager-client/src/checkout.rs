//! Checkout Wizard State Machine
//!
//! A linear sequence of steps with one-step forward/backward navigation
//! and a partial-update state object threaded through all steps. Each step
//! owns a subset of the fields and merges its changes shallowly, never
//! touching sibling-step data.

use shared::models::{
    Address, CartLine, CheckoutItem, CheckoutRequest, CheckoutResponse,
};

use crate::api::StorefrontApi;
use crate::error::{CheckoutError, CheckoutResult};
use crate::validation::{
    validate_address, validate_required_text, MAX_GIFT_MESSAGE_LEN,
};

/// Checkout wizard step, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    CartReview,
    Delivery,
    Billing,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    /// The step one forward, saturating at `Confirmation`
    pub fn next(self) -> Self {
        match self {
            Self::CartReview => Self::Delivery,
            Self::Delivery => Self::Billing,
            Self::Billing => Self::Payment,
            Self::Payment => Self::Confirmation,
            Self::Confirmation => Self::Confirmation,
        }
    }

    /// The step one back, saturating at `CartReview`
    pub fn previous(self) -> Self {
        match self {
            Self::CartReview => Self::CartReview,
            Self::Delivery => Self::CartReview,
            Self::Billing => Self::Delivery,
            Self::Payment => Self::Billing,
            Self::Confirmation => Self::Payment,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Self::Confirmation
    }
}

/// State accumulated across the wizard steps
///
/// Lives for one checkout session; reset on completion or abandonment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutState {
    pub shipping_address: Address,
    pub billing_address: Address,
    pub billing_is_same_as_shipping: bool,
    pub is_gift: bool,
    pub gift_message: Option<String>,
    pub gift_wrap: bool,
    pub promo_code: Option<String>,
    pub payment_method: String,
}

/// Partial update to [`CheckoutState`]
///
/// Every field is optional; a step sets only the fields it owns and the
/// merge leaves the rest untouched.
#[derive(Debug, Clone, Default)]
pub struct CheckoutUpdate {
    pub shipping_address: Option<Address>,
    pub billing_address: Option<Address>,
    pub billing_is_same_as_shipping: Option<bool>,
    pub is_gift: Option<bool>,
    pub gift_message: Option<Option<String>>,
    pub gift_wrap: Option<bool>,
    pub promo_code: Option<Option<String>>,
    pub payment_method: Option<String>,
}

impl CheckoutState {
    /// Shallow-merge `update` into this state
    pub fn apply(&mut self, update: CheckoutUpdate) {
        if let Some(v) = update.shipping_address {
            self.shipping_address = v;
        }
        if let Some(v) = update.billing_address {
            self.billing_address = v;
        }
        if let Some(v) = update.billing_is_same_as_shipping {
            self.billing_is_same_as_shipping = v;
        }
        if let Some(v) = update.is_gift {
            self.is_gift = v;
        }
        if let Some(v) = update.gift_message {
            self.gift_message = v;
        }
        if let Some(v) = update.gift_wrap {
            self.gift_wrap = v;
        }
        if let Some(v) = update.promo_code {
            self.promo_code = v;
        }
        if let Some(v) = update.payment_method {
            self.payment_method = v;
        }
    }
}

/// The multi-step checkout flow
///
/// Navigation moves exactly one step at a time; `Confirmation` is absorbing
/// until [`CheckoutWizard::reset`].
#[derive(Debug, Clone, Default)]
pub struct CheckoutWizard {
    step: CheckoutStep,
    state: CheckoutState,
}

impl CheckoutWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> CheckoutStep {
        self.step
    }

    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Merge a step's field changes into the wizard state
    pub fn update(&mut self, update: CheckoutUpdate) {
        self.state.apply(update);
    }

    /// Advance exactly one step
    pub fn go_to_next_step(&mut self) -> CheckoutStep {
        self.step = self.step.next();
        self.step
    }

    /// Retreat exactly one step; a no-op on the first step
    pub fn go_to_previous_step(&mut self) -> CheckoutStep {
        self.step = self.step.previous();
        self.step
    }

    /// Return every field to its initial value
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Required-field checks for the active form
    ///
    /// Validation is local to the step the shopper is on; there is no
    /// cross-step pass before submission beyond what the backend enforces.
    pub fn validate_current_step(&self) -> CheckoutResult<()> {
        match self.step {
            CheckoutStep::CartReview | CheckoutStep::Confirmation => Ok(()),
            CheckoutStep::Delivery => validate_address(&self.state.shipping_address, "shipping"),
            CheckoutStep::Billing => {
                // The billing form subtree is hidden (and not required) when
                // it mirrors the shipping address
                if !self.state.billing_is_same_as_shipping {
                    validate_address(&self.state.billing_address, "billing")?;
                }
                if self.state.is_gift {
                    if let Some(message) = &self.state.gift_message {
                        if message.len() > MAX_GIFT_MESSAGE_LEN {
                            return Err(CheckoutError::InvalidField {
                                field: "gift message".to_string(),
                                reason: format!(
                                    "too long ({} chars, max {})",
                                    message.len(),
                                    MAX_GIFT_MESSAGE_LEN
                                ),
                            });
                        }
                    }
                }
                Ok(())
            }
            CheckoutStep::Payment => {
                validate_required_text(&self.state.payment_method, "payment method", 200)
            }
        }
    }

    /// Build the checkout payload from the accumulated state
    ///
    /// When billing mirrors shipping the shipping address is substituted;
    /// the hidden billing stub is never sent.
    pub fn build_request(&self, lines: &[CartLine]) -> CheckoutResult<CheckoutRequest> {
        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let billing_address = if self.state.billing_is_same_as_shipping {
            self.state.shipping_address.clone()
        } else {
            self.state.billing_address.clone()
        };

        Ok(CheckoutRequest {
            shipping_address: self.state.shipping_address.clone(),
            billing_address,
            items: lines
                .iter()
                .map(|line| CheckoutItem {
                    product_id: line.product_id(),
                    quantity: line.quantity(),
                })
                .collect(),
            is_gift: self.state.is_gift,
            gift_message: self.state.gift_message.clone(),
            gift_wrap: self.state.gift_wrap,
            promo_code: self.state.promo_code.clone(),
            payment_method: self.state.payment_method.clone(),
        })
    }

    /// Validate the active step, submit the payload, and advance to
    /// `Confirmation` on success
    pub async fn submit(
        &mut self,
        api: &dyn StorefrontApi,
        lines: &[CartLine],
    ) -> CheckoutResult<CheckoutResponse> {
        self.validate_current_step()?;
        let request = self.build_request(lines)?;
        let response = api.process_checkout(&request).await?;
        tracing::info!(order_id = response.order_id, "checkout processed");
        self.step = CheckoutStep::Confirmation;
        Ok(response)
    }
}
