//! Build a cart and show which vendors can fill it.

use anyhow::{Context as _, Result};
use serde::Serialize;
use storefront_commerce::cart::Cart;
use storefront_commerce::vendors::VendorMatch;
use storefront_commerce::{Money, ProductId, Storefront};

use super::vendors::print_matches;
use super::CartArgs;
use crate::context::Context;
use crate::output::Output;

#[derive(Serialize)]
struct CartReport<'a> {
    cart: &'a Cart,
    item_count: u64,
    subtotal: Money,
    vendors: Vec<VendorMatch>,
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;
    let mut cart = Cart::new();

    for item in &args.add {
        let product_id = ProductId::new(item.product_id.as_str());
        let quantity = cart
            .add_item(store.catalog(), &product_id, item.quantity)
            .with_context(|| format!("Cannot add {}x{}", item.product_id, item.quantity))?;
        ctx.output
            .debug(&format!("{} now has quantity {}", product_id, quantity));
    }

    let subtotal = cart.subtotal(store.catalog())?;
    let vendors = store.match_vendors_for_cart(cart.product_ids());

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            cart: &cart,
            item_count: cart.item_count(),
            subtotal,
            vendors,
        });
        return Ok(());
    }

    print_cart(&ctx.output, &store, &cart, subtotal);
    print_matches(&ctx.output, &vendors);
    Ok(())
}

/// Print cart lines and totals.
pub fn print_cart(output: &Output, store: &Storefront, cart: &Cart, subtotal: Money) {
    output.header("Cart");
    if cart.is_empty() {
        output.info("Your cart is empty.");
        return;
    }
    for line in cart.lines() {
        let name = store
            .catalog()
            .get(&line.product_id)
            .map(|p| p.name.as_str())
            .unwrap_or("?");
        output.list_item(&format!("{} x{} (#{})", name, line.quantity, line.product_id));
    }
    output.kv("items", &cart.item_count().to_string());
    output.kv("subtotal", &subtotal.to_string());
}
