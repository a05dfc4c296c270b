//! Storefront API surface
//!
//! Thin request/response adapters over the REST endpoints. The trait is the
//! seam the cart engine and checkout wizard depend on; tests swap in an
//! in-memory implementation. Every call is at-most-once: no client-side
//! retry, a failure is terminal for that one user action.

use async_trait::async_trait;

use shared::models::{
    AddToCartRequest, CalculateShippingTaxRequest, Cart, CheckoutRequest, CheckoutResponse,
    GuestCartMergeRequest, Order, PromoCode, ShippingTaxInfo, UpdateCartItemRequest,
    ValidatePromoCodeRequest,
};

use crate::{ClientResult, HttpClient};

/// Remote operations the cart and checkout flows depend on
///
/// Endpoints marked authenticated require a bearer token; the others are
/// open. See the gateway table in the storefront API docs.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Fetch the authenticated cart (`GET /api/cart`)
    async fn get_cart(&self) -> ClientResult<Cart>;

    /// Add an item, coalescing with an existing line (`POST /api/cart/items`)
    async fn add_to_cart(&self, req: &AddToCartRequest) -> ClientResult<Cart>;

    /// Update a line's quantity (`PUT /api/cart/items/{id}`)
    async fn update_cart_item(
        &self,
        item_id: i64,
        req: &UpdateCartItemRequest,
    ) -> ClientResult<Cart>;

    /// Remove a line (`DELETE /api/cart/items/{id}`)
    async fn remove_cart_item(&self, item_id: i64) -> ClientResult<Cart>;

    /// Merge guest items into the user cart (`POST /api/cart/merge`)
    async fn merge_guest_cart(&self, req: &GuestCartMergeRequest) -> ClientResult<Cart>;

    /// Empty the cart (`POST /api/cart/clear`)
    async fn clear_cart(&self) -> ClientResult<()>;

    /// Move a line to saved-for-later (`POST /api/cart/items/{id}/save`)
    async fn save_for_later(&self, item_id: i64) -> ClientResult<Cart>;

    /// Move a saved item back to the cart (`POST /api/cart/saved/{id}/restore`)
    async fn restore_saved_item(&self, saved_id: i64) -> ClientResult<Cart>;

    /// Delete a saved item (`DELETE /api/cart/saved/{id}`)
    async fn remove_saved_item(&self, saved_id: i64) -> ClientResult<Cart>;

    /// Validate a discount code (`POST /api/promo-codes/validate`, open)
    async fn validate_promo_code(&self, req: &ValidatePromoCodeRequest) -> ClientResult<PromoCode>;

    /// Quote shipping and tax (`POST /api/shipping/calculate`, open)
    async fn calculate_shipping_tax(
        &self,
        req: &CalculateShippingTaxRequest,
    ) -> ClientResult<ShippingTaxInfo>;

    /// Submit the checkout payload (`POST /api/checkout/process`)
    async fn process_checkout(&self, req: &CheckoutRequest) -> ClientResult<CheckoutResponse>;

    /// Order history (`GET /api/orders`)
    async fn get_user_orders(&self) -> ClientResult<Vec<Order>>;

    /// Single order detail (`GET /api/orders/{id}`)
    async fn get_order(&self, order_id: i64) -> ClientResult<Order>;
}

#[async_trait]
impl StorefrontApi for HttpClient {
    async fn get_cart(&self) -> ClientResult<Cart> {
        self.get("/api/cart").await
    }

    async fn add_to_cart(&self, req: &AddToCartRequest) -> ClientResult<Cart> {
        self.post("/api/cart/items", req).await
    }

    async fn update_cart_item(
        &self,
        item_id: i64,
        req: &UpdateCartItemRequest,
    ) -> ClientResult<Cart> {
        self.put(&format!("/api/cart/items/{}", item_id), req).await
    }

    async fn remove_cart_item(&self, item_id: i64) -> ClientResult<Cart> {
        self.delete(&format!("/api/cart/items/{}", item_id)).await
    }

    async fn merge_guest_cart(&self, req: &GuestCartMergeRequest) -> ClientResult<Cart> {
        self.post("/api/cart/merge", req).await
    }

    async fn clear_cart(&self) -> ClientResult<()> {
        self.post_unit("/api/cart/clear").await
    }

    async fn save_for_later(&self, item_id: i64) -> ClientResult<Cart> {
        self.post_empty(&format!("/api/cart/items/{}/save", item_id))
            .await
    }

    async fn restore_saved_item(&self, saved_id: i64) -> ClientResult<Cart> {
        self.post_empty(&format!("/api/cart/saved/{}/restore", saved_id))
            .await
    }

    async fn remove_saved_item(&self, saved_id: i64) -> ClientResult<Cart> {
        self.delete(&format!("/api/cart/saved/{}", saved_id)).await
    }

    async fn validate_promo_code(&self, req: &ValidatePromoCodeRequest) -> ClientResult<PromoCode> {
        self.post("/api/promo-codes/validate", req).await
    }

    async fn calculate_shipping_tax(
        &self,
        req: &CalculateShippingTaxRequest,
    ) -> ClientResult<ShippingTaxInfo> {
        self.post("/api/shipping/calculate", req).await
    }

    async fn process_checkout(&self, req: &CheckoutRequest) -> ClientResult<CheckoutResponse> {
        self.post_checkout("/api/checkout/process", req).await
    }

    async fn get_user_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("/api/orders").await
    }

    async fn get_order(&self, order_id: i64) -> ClientResult<Order> {
        self.get(&format!("/api/orders/{}", order_id)).await
    }
}
