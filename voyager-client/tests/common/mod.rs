#![allow(dead_code)]

//! In-memory storefront API for integration tests
//!
//! Mirrors the backend's observable semantics: duplicate adds coalesce into
//! one line, merges cap at stock and skip unknown products, and every
//! mutation answers with the full updated cart.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use shared::models::{
    AddToCartRequest, Address, CalculateShippingTaxRequest, Cart, CartItem, CheckoutRequest,
    CheckoutResponse, GuestCartMergeRequest, Order, OrderItem, OrderStatus, Product, PromoCode,
    SavedItem, ShippingTaxInfo, UpdateCartItemRequest, ValidatePromoCodeRequest,
};
use voyager_client::{ClientError, ClientResult, StorefrontApi};

pub struct MockApi {
    catalog: HashMap<i64, Product>,
    cart: Mutex<Cart>,
    orders: Mutex<Vec<Order>>,
    next_id: AtomicI64,
}

pub fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        image_url: None,
        category: None,
        stock,
    }
}

impl MockApi {
    pub fn new(products: Vec<Product>) -> Self {
        let catalog = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            catalog,
            cart: Mutex::new(Cart {
                id: 1,
                user_id: 42,
                items: Vec::new(),
                saved_items: Vec::new(),
            }),
            orders: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(100),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn new_item(&self, cart_id: i64, product: &Product, quantity: i64) -> CartItem {
        let now = Utc::now();
        CartItem {
            id: self.next_id(),
            cart_id,
            product_id: product.id,
            quantity,
            product: Some(product.clone()),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn order_count(&self) -> usize {
        self.orders.lock().unwrap().len()
    }
}

#[async_trait]
impl StorefrontApi for MockApi {
    async fn get_cart(&self) -> ClientResult<Cart> {
        Ok(self.cart.lock().unwrap().clone())
    }

    async fn add_to_cart(&self, req: &AddToCartRequest) -> ClientResult<Cart> {
        let product = self
            .catalog
            .get(&req.product_id)
            .ok_or_else(|| ClientError::Validation("Product not found".to_string()))?;

        let mut cart = self.cart.lock().unwrap();
        match cart.items.iter_mut().find(|i| i.product_id == product.id) {
            Some(existing) => {
                if existing.quantity + req.quantity > product.stock {
                    return Err(ClientError::Validation(format!(
                        "Only {} units available",
                        product.stock
                    )));
                }
                existing.quantity += req.quantity;
                existing.updated_at = Utc::now();
            }
            None => {
                if req.quantity > product.stock {
                    return Err(ClientError::Validation(format!(
                        "Only {} units available",
                        product.stock
                    )));
                }
                let cart_id = cart.id;
                let item = self.new_item(cart_id, product, req.quantity);
                cart.items.push(item);
            }
        }
        Ok(cart.clone())
    }

    async fn update_cart_item(
        &self,
        item_id: i64,
        req: &UpdateCartItemRequest,
    ) -> ClientResult<Cart> {
        let mut cart = self.cart.lock().unwrap();
        let item = cart
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| ClientError::NotFound("Cart item not found".to_string()))?;
        item.quantity = req.quantity;
        item.updated_at = Utc::now();
        Ok(cart.clone())
    }

    async fn remove_cart_item(&self, item_id: i64) -> ClientResult<Cart> {
        let mut cart = self.cart.lock().unwrap();
        if !cart.items.iter().any(|i| i.id == item_id) {
            return Err(ClientError::NotFound("Cart item not found".to_string()));
        }
        cart.items.retain(|i| i.id != item_id);
        Ok(cart.clone())
    }

    async fn merge_guest_cart(&self, req: &GuestCartMergeRequest) -> ClientResult<Cart> {
        let mut cart = self.cart.lock().unwrap();
        for guest_item in &req.items {
            // Unknown products are skipped, quantities cap at stock
            let Some(product) = self.catalog.get(&guest_item.product_id) else {
                continue;
            };
            match cart.items.iter_mut().find(|i| i.product_id == product.id) {
                Some(existing) => {
                    existing.quantity = (existing.quantity + guest_item.quantity).min(product.stock);
                    existing.updated_at = Utc::now();
                }
                None => {
                    let quantity = guest_item.quantity.min(product.stock);
                    let cart_id = cart.id;
                    let item = self.new_item(cart_id, product, quantity);
                    cart.items.push(item);
                }
            }
        }
        Ok(cart.clone())
    }

    async fn clear_cart(&self) -> ClientResult<()> {
        self.cart.lock().unwrap().items.clear();
        Ok(())
    }

    async fn save_for_later(&self, item_id: i64) -> ClientResult<Cart> {
        let mut cart = self.cart.lock().unwrap();
        let pos = cart
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| ClientError::NotFound("Cart item not found".to_string()))?;
        let item = cart.items.remove(pos);

        match cart
            .saved_items
            .iter_mut()
            .find(|s| s.product_id == item.product_id)
        {
            Some(existing) => existing.quantity = item.quantity,
            None => {
                let saved = SavedItem {
                    id: self.next_id(),
                    cart_id: item.cart_id,
                    product_id: item.product_id,
                    quantity: item.quantity,
                    product: item.product.clone(),
                    created_at: Utc::now(),
                };
                cart.saved_items.push(saved);
            }
        }
        Ok(cart.clone())
    }

    async fn restore_saved_item(&self, saved_id: i64) -> ClientResult<Cart> {
        let mut cart = self.cart.lock().unwrap();
        let pos = cart
            .saved_items
            .iter()
            .position(|s| s.id == saved_id)
            .ok_or_else(|| ClientError::NotFound("Saved item not found".to_string()))?;
        let saved = cart.saved_items.remove(pos);

        match cart
            .items
            .iter_mut()
            .find(|i| i.product_id == saved.product_id)
        {
            Some(existing) => {
                existing.quantity += saved.quantity;
                existing.updated_at = Utc::now();
            }
            None => {
                let now = Utc::now();
                let item = CartItem {
                    id: self.next_id(),
                    cart_id: saved.cart_id,
                    product_id: saved.product_id,
                    quantity: saved.quantity,
                    product: saved.product.clone(),
                    created_at: now,
                    updated_at: now,
                };
                cart.items.push(item);
            }
        }
        Ok(cart.clone())
    }

    async fn remove_saved_item(&self, saved_id: i64) -> ClientResult<Cart> {
        let mut cart = self.cart.lock().unwrap();
        if !cart.saved_items.iter().any(|s| s.id == saved_id) {
            return Err(ClientError::NotFound("Saved item not found".to_string()));
        }
        cart.saved_items.retain(|s| s.id != saved_id);
        Ok(cart.clone())
    }

    async fn validate_promo_code(&self, req: &ValidatePromoCodeRequest) -> ClientResult<PromoCode> {
        if req.code.eq_ignore_ascii_case("SAVE20") {
            Ok(PromoCode {
                code: req.code.clone(),
                discount_percentage: 20.0,
                is_valid: true,
                message: Some("Promo code applied! You save 20%".to_string()),
            })
        } else {
            Ok(PromoCode {
                code: req.code.clone(),
                discount_percentage: 0.0,
                is_valid: false,
                message: Some("Invalid promo code".to_string()),
            })
        }
    }

    async fn calculate_shipping_tax(
        &self,
        req: &CalculateShippingTaxRequest,
    ) -> ClientResult<ShippingTaxInfo> {
        // California rates with the production shipping tiers
        let shipping_cost = if req.subtotal >= 50.0 {
            0.0
        } else if req.subtotal >= 25.0 {
            5.99
        } else {
            9.99
        };
        let tax_rate = 0.0725;
        let tax_amount = req.subtotal * tax_rate;
        Ok(ShippingTaxInfo {
            zip_code: req.zip_code.clone(),
            state: "CA".to_string(),
            tax_rate,
            shipping_cost,
            subtotal: req.subtotal,
            tax_amount,
            shipping_amount: shipping_cost,
            total: req.subtotal + tax_amount + shipping_cost,
        })
    }

    async fn process_checkout(&self, req: &CheckoutRequest) -> ClientResult<CheckoutResponse> {
        let mut subtotal = 0.0;
        let mut order_items = Vec::new();
        let order_id = self.next_id();

        for line in &req.items {
            let product = self
                .catalog
                .get(&line.product_id)
                .ok_or_else(|| ClientError::Validation("Product not found".to_string()))?;
            if line.quantity > product.stock {
                return Err(ClientError::Validation(format!(
                    "insufficient stock for {}",
                    product.name
                )));
            }
            let line_subtotal = product.price * line.quantity as f64;
            subtotal += line_subtotal;
            order_items.push(OrderItem {
                id: self.next_id(),
                order_id,
                product_id: product.id,
                product_name: product.name.clone(),
                product_price: product.price,
                quantity: line.quantity,
                subtotal: line_subtotal,
                created_at: Utc::now(),
            });
        }

        let discount_amount = match req.promo_code.as_deref() {
            Some(code) if code.eq_ignore_ascii_case("SAVE20") => subtotal * 0.20,
            _ => 0.0,
        };
        let shipping_amount = if subtotal >= 50.0 { 0.0 } else { 9.99 };
        let total = subtotal - discount_amount + shipping_amount;

        let order = Order {
            id: order_id,
            user_id: 42,
            status: OrderStatus::Pending,
            shipping_address: req.shipping_address.clone(),
            billing_address: req.billing_address.clone(),
            items: order_items,
            subtotal,
            discount_amount,
            tax_amount: 0.0,
            shipping_amount,
            total,
            is_gift: req.is_gift,
            gift_message: req.gift_message.clone(),
            gift_wrap: req.gift_wrap,
            promo_code: req.promo_code.clone(),
            created_at: Utc::now(),
        };
        self.orders.lock().unwrap().push(order);
        self.cart.lock().unwrap().items.clear();

        Ok(CheckoutResponse {
            order_id,
            status: OrderStatus::Pending,
            message: Some("Order placed".to_string()),
        })
    }

    async fn get_user_orders(&self) -> ClientResult<Vec<Order>> {
        Ok(self.orders.lock().unwrap().clone())
    }

    async fn get_order(&self, order_id: i64) -> ClientResult<Order> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == order_id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound("Order not found".to_string()))
    }
}

/// A complete shipping address for checkout tests
pub fn test_address() -> Address {
    Address {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        address_line1: "12 Analytical Way".to_string(),
        address_line2: None,
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        zip_code: "94103".to_string(),
        country: "US".to_string(),
    }
}
