//! Vendors that stock a whole set of products.

use anyhow::Result;
use storefront_commerce::vendors::VendorMatch;
use storefront_commerce::ProductId;

use super::VendorsArgs;
use crate::context::Context;
use crate::output::Output;

/// Run the vendors command.
pub async fn run(args: VendorsArgs, ctx: &Context) -> Result<()> {
    let store = ctx.storefront()?;

    for id in &args.ids {
        if !store.catalog().contains(&ProductId::new(id.as_str())) {
            ctx.output.warn(&format!("Unknown product id: {}", id));
        }
    }

    let matches = store.match_vendors_for_cart(args.ids.iter().map(String::as_str));
    if ctx.output.is_json() {
        ctx.output.json(&matches);
        return Ok(());
    }

    print_matches(&ctx.output, &matches);
    Ok(())
}

/// Print vendor matches, one vendor per line.
pub fn print_matches(output: &Output, matches: &[VendorMatch]) {
    output.header("Vendors with every item in stock");
    if matches.is_empty() {
        output.info("No vendor stocks all of these products.");
        return;
    }
    for vendor in matches {
        output.list_item(&format!("{} ({})", vendor.vendor_name, vendor.vendor_id));
    }
}
