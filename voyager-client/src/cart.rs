//! Cart Reconciliation Engine
//!
//! Owns the session's cart state in one of two mutually exclusive
//! representations: a server-backed [`Cart`] once authenticated, or a
//! locally persisted guest item list before that. Authenticated mutations
//! treat the server response as the sole source of truth and replace local
//! state wholesale; guest mutations are applied locally and persisted after
//! every change.

use std::sync::Arc;

use shared::models::{
    AddToCartRequest, CalculateShippingTaxRequest, Cart, CartLine, GuestCartItem,
    GuestCartMergeRequest, Product, PromoCode, ShippingTaxInfo, UpdateCartItemRequest,
    ValidatePromoCodeRequest,
};

use crate::api::StorefrontApi;
use crate::error::{ClientError, ClientResult};
use crate::pricing::{self, CartTotals};
use crate::storage::GuestCartStore;

/// Increment the matching guest entry or append a new one.
///
/// Guest carts keep exactly one entry per product id.
fn upsert_guest_item(items: &mut Vec<GuestCartItem>, product_id: i64, quantity: i64) {
    match items.iter_mut().find(|i| i.product_id == product_id) {
        Some(existing) => existing.quantity += quantity,
        None => items.push(GuestCartItem::new(product_id, quantity)),
    }
}

/// Session-scoped cart state
///
/// Constructed once at session start and torn down on logout or session
/// end. Methods take `&mut self`, so mutations from one session are
/// serialized by construction; a second mutation cannot be issued while an
/// earlier one is still in flight.
pub struct CartSession {
    api: Arc<dyn StorefrontApi>,
    guest_store: GuestCartStore,
    cart: Option<Cart>,
    guest: Vec<GuestCartItem>,
    promo: Option<PromoCode>,
    shipping_tax: Option<ShippingTaxInfo>,
}

impl CartSession {
    /// Create a session in guest mode, restoring any persisted guest cart
    pub fn new(api: Arc<dyn StorefrontApi>, guest_store: GuestCartStore) -> Self {
        let guest = guest_store.load();
        Self {
            api,
            guest_store,
            cart: None,
            guest,
            promo: None,
            shipping_tax: None,
        }
    }

    // ==================== State access ====================

    pub fn is_authenticated(&self) -> bool {
        self.cart.is_some()
    }

    pub fn cart(&self) -> Option<&Cart> {
        self.cart.as_ref()
    }

    pub fn guest_items(&self) -> &[GuestCartItem] {
        &self.guest
    }

    pub fn promo_code(&self) -> Option<&PromoCode> {
        self.promo.as_ref()
    }

    pub fn shipping_tax(&self) -> Option<&ShippingTaxInfo> {
        self.shipping_tax.as_ref()
    }

    /// Attach catalog data to guest lines for display and pricing
    ///
    /// Guest persistence stores only `{product_id, quantity}`; callers that
    /// have fetched the referenced products hand them in here. Lines whose
    /// product stays missing contribute zero to pricing.
    pub fn hydrate_guest_products(&mut self, products: &[Product]) {
        for item in &mut self.guest {
            if item.product.is_none() {
                item.product = products.iter().find(|p| p.id == item.product_id).cloned();
            }
        }
    }

    /// Unified view over the active representation
    pub fn lines(&self) -> Vec<CartLine> {
        match &self.cart {
            Some(cart) => cart
                .items
                .iter()
                .cloned()
                .map(CartLine::Authenticated)
                .collect(),
            None => self.guest.iter().cloned().map(CartLine::Guest).collect(),
        }
    }

    /// Derived pricing values for the current state
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.lines(), self.promo.as_ref(), self.shipping_tax.as_ref())
    }

    // ==================== Lifecycle ====================

    /// Fetch the authoritative cart and adopt it (entering authenticated
    /// mode when called for the first time after login)
    pub async fn refresh(&mut self) -> ClientResult<()> {
        let cart = self.api.get_cart().await?;
        self.cart = Some(cart);
        Ok(())
    }

    /// Merge the persisted guest cart into the freshly authenticated user
    /// cart. Invoked once at login; safe to retry - once the guest list has
    /// been emptied a repeated merge is a no-op server-side.
    pub async fn merge_guest_into_user(&mut self) -> ClientResult<()> {
        let request = GuestCartMergeRequest {
            items: self.guest.clone(),
        };
        let cart = self.api.merge_guest_cart(&request).await?;
        tracing::info!(
            merged = request.items.len(),
            cart_id = cart.id,
            "merged guest cart into user cart"
        );
        self.cart = Some(cart);
        self.guest.clear();
        if let Err(e) = self.guest_store.clear() {
            tracing::warn!("failed to clear persisted guest cart: {}", e);
        }
        self.shipping_tax = None;
        Ok(())
    }

    /// Drop all authenticated state and return to guest mode
    pub fn logout(&mut self) {
        self.cart = None;
        self.promo = None;
        self.shipping_tax = None;
        self.guest = self.guest_store.load();
    }

    // ==================== Cart mutation ====================

    /// Add `quantity` of a product
    ///
    /// Authenticated: the server coalesces a duplicate product into the
    /// existing line and returns the updated cart. Guest: coalesced locally
    /// and persisted.
    pub async fn add_item(&mut self, product_id: i64, quantity: i64) -> ClientResult<()> {
        if quantity < 1 {
            return Err(ClientError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        if self.is_authenticated() {
            let request = AddToCartRequest {
                product_id,
                quantity,
            };
            let cart = self.api.add_to_cart(&request).await?;
            self.cart = Some(cart);
        } else {
            upsert_guest_item(&mut self.guest, product_id, quantity);
            self.persist_guest();
        }
        self.shipping_tax = None;
        Ok(())
    }

    /// Set a line's quantity
    ///
    /// `line_id` is the server row id when authenticated and the product id
    /// in guest mode. Zero and negative quantities are rejected; removal is
    /// its own operation.
    pub async fn update_item(&mut self, line_id: i64, quantity: i64) -> ClientResult<()> {
        if quantity < 1 {
            return Err(ClientError::Validation(
                "quantity must be at least 1".to_string(),
            ));
        }

        if self.is_authenticated() {
            let request = UpdateCartItemRequest { quantity };
            let cart = self.api.update_cart_item(line_id, &request).await?;
            self.cart = Some(cart);
        } else {
            // Matching by product id; an unknown id is ignored
            if let Some(item) = self.guest.iter_mut().find(|i| i.product_id == line_id) {
                item.quantity = quantity;
                self.persist_guest();
            }
        }
        self.shipping_tax = None;
        Ok(())
    }

    /// Remove a line
    ///
    /// `line_id` follows the same convention as [`CartSession::update_item`].
    pub async fn remove_item(&mut self, line_id: i64) -> ClientResult<()> {
        if self.is_authenticated() {
            let cart = self.api.remove_cart_item(line_id).await?;
            self.cart = Some(cart);
        } else {
            self.guest.retain(|i| i.product_id != line_id);
            self.persist_guest();
        }
        self.shipping_tax = None;
        Ok(())
    }

    /// Empty the cart
    pub async fn clear(&mut self) -> ClientResult<()> {
        if self.is_authenticated() {
            self.api.clear_cart().await?;
            // The clear endpoint has no body; re-fetch the authoritative cart
            let cart = self.api.get_cart().await?;
            self.cart = Some(cart);
        } else {
            self.guest.clear();
            if let Err(e) = self.guest_store.clear() {
                tracing::warn!("failed to clear persisted guest cart: {}", e);
            }
        }
        self.shipping_tax = None;
        Ok(())
    }

    // ==================== Saved items ====================

    /// Move a line to saved-for-later (authenticated only)
    pub async fn save_for_later(&mut self, item_id: i64) -> ClientResult<()> {
        self.require_authenticated()?;
        let cart = self.api.save_for_later(item_id).await?;
        self.cart = Some(cart);
        self.shipping_tax = None;
        Ok(())
    }

    /// Move a saved item back into the cart (authenticated only)
    pub async fn restore_saved_item(&mut self, saved_id: i64) -> ClientResult<()> {
        self.require_authenticated()?;
        let cart = self.api.restore_saved_item(saved_id).await?;
        self.cart = Some(cart);
        self.shipping_tax = None;
        Ok(())
    }

    /// Delete a saved item (authenticated only)
    pub async fn remove_saved_item(&mut self, saved_id: i64) -> ClientResult<()> {
        self.require_authenticated()?;
        let cart = self.api.remove_saved_item(saved_id).await?;
        self.cart = Some(cart);
        Ok(())
    }

    // ==================== Promo code ====================

    /// Validate a promo code and keep the result
    ///
    /// An invalid code is kept too - it carries the server's message for
    /// display - but contributes zero discount.
    pub async fn apply_promo_code(&mut self, code: &str) -> ClientResult<PromoCode> {
        let request = ValidatePromoCodeRequest {
            code: code.to_string(),
        };
        let promo = self.api.validate_promo_code(&request).await?;
        self.promo = Some(promo.clone());
        Ok(promo)
    }

    pub fn remove_promo_code(&mut self) {
        self.promo = None;
    }

    // ==================== Shipping quote ====================

    /// Request a shipping/tax quote for the current subtotal
    ///
    /// The quote is a snapshot; any later cart mutation discards it and the
    /// caller must request a new one.
    pub async fn calculate_shipping_tax(&mut self, zip_code: &str) -> ClientResult<ShippingTaxInfo> {
        let request = CalculateShippingTaxRequest {
            zip_code: zip_code.to_string(),
            subtotal: pricing::subtotal(&self.lines()),
        };
        let quote = self.api.calculate_shipping_tax(&request).await?;
        self.shipping_tax = Some(quote.clone());
        Ok(quote)
    }

    // ==================== Internals ====================

    fn require_authenticated(&self) -> ClientResult<()> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(ClientError::Unauthorized)
        }
    }

    /// Persist the guest list; storage failures degrade to in-memory only
    fn persist_guest(&self) {
        if let Err(e) = self.guest_store.save(&self.guest) {
            tracing::warn!("failed to persist guest cart: {}", e);
        }
    }
}
