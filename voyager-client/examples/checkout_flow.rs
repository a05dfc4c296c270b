// voyager-client/examples/checkout_flow.rs
// Drive a guest cart through merge, pricing, and checkout against a
// running storefront API.

use std::sync::Arc;

use voyager_client::{
    CartSession, CheckoutUpdate, CheckoutWizard, ClientConfig, GuestCartStore, TokenStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <api_url> [token]", args[0]);
        println!("  Example: {} http://localhost:5001", args[0]);
        return Ok(());
    }

    let api_url = &args[1];

    let storage_dir = std::env::var("VOYAGER_STORAGE_DIR").unwrap_or_else(|_| "./.voyager".to_string());
    let token_store = TokenStore::new(&storage_dir);

    // Prefer a token from the CLI, falling back to the stored one
    let token = args.get(2).cloned().or_else(|| token_store.load());

    let mut config = ClientConfig::new(api_url);
    if let Ok(checkout_url) = std::env::var("VOYAGER_CHECKOUT_URL") {
        config = config.with_checkout_url(checkout_url);
    }
    if let Some(token) = &token {
        config = config.with_token(token);
    }

    let http = Arc::new(config.build_http_client());
    let mut cart = CartSession::new(http.clone(), GuestCartStore::new(&storage_dir));

    // Build up a guest cart
    cart.add_item(1, 2).await?;
    cart.add_item(2, 1).await?;
    let totals = cart.totals();
    tracing::info!(
        items = totals.item_count,
        subtotal = totals.subtotal,
        "guest cart ready"
    );

    if totals.amount_to_free_shipping > 0.0 {
        tracing::info!(
            "${:.2} away from free shipping ({:.0}%)",
            totals.amount_to_free_shipping,
            totals.free_shipping_progress
        );
    }

    if token.is_none() {
        tracing::info!("no token; stopping before the authenticated flow");
        return Ok(());
    }

    // Authenticated: merge the guest cart, price it, and check out
    cart.merge_guest_into_user().await?;
    let promo = cart.apply_promo_code("SAVE20").await?;
    tracing::info!(valid = promo.is_valid, "promo: {:?}", promo.message);

    let quote = cart.calculate_shipping_tax("94103").await?;
    tracing::info!(total = quote.total, shipping = quote.shipping_cost, "quoted");

    let mut wizard = CheckoutWizard::new();
    wizard.go_to_next_step();
    wizard.update(CheckoutUpdate {
        shipping_address: Some(shared::models::Address {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            address_line1: "12 Analytical Way".to_string(),
            address_line2: None,
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            zip_code: "94103".to_string(),
            country: "US".to_string(),
        }),
        ..Default::default()
    });
    wizard.validate_current_step()?;
    wizard.go_to_next_step();

    wizard.update(CheckoutUpdate {
        billing_is_same_as_shipping: Some(true),
        ..Default::default()
    });
    wizard.validate_current_step()?;
    wizard.go_to_next_step();

    wizard.update(CheckoutUpdate {
        promo_code: Some(promo.is_valid.then(|| promo.code.clone())),
        payment_method: Some("tok_visa".to_string()),
        ..Default::default()
    });

    let confirmation = wizard.submit(http.as_ref(), &cart.lines()).await?;
    tracing::info!(order_id = confirmation.order_id, "order placed");

    Ok(())
}
