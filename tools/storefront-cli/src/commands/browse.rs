//! Interactive storefront session.

use anyhow::Result;
use dialoguer::{Input, Select};
use storefront_commerce::cart::{Cart, Selection};
use storefront_commerce::schedule::TimerScheduler;
use storefront_commerce::search::CatalogQuery;
use storefront_commerce::vendors::VendorMatchCache;
use storefront_commerce::Storefront;

use super::cart::print_cart;
use super::search::print_view;
use super::vendors::print_matches;
use super::BrowseArgs;
use crate::context::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Search,
    LoadMore,
    Toggle,
    AddToCart,
    SelectionVendors,
    CartVendors,
    ShowCart,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::Search,
        Action::LoadMore,
        Action::Toggle,
        Action::AddToCart,
        Action::SelectionVendors,
        Action::CartVendors,
        Action::ShowCart,
        Action::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            Action::Search => "Search",
            Action::LoadMore => "Load more",
            Action::Toggle => "Select / unselect a product",
            Action::AddToCart => "Add selected products to cart",
            Action::SelectionVendors => "Vendors for selected products",
            Action::CartVendors => "Vendors for cart",
            Action::ShowCart => "Show cart",
            Action::Quit => "Quit",
        }
    }
}

struct Session<'a> {
    store: &'a Storefront,
    query: CatalogQuery<TimerScheduler>,
    selection: Selection,
    cart: Cart,
    selection_vendors: VendorMatchCache,
    cart_vendors: VendorMatchCache,
}

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        anyhow::bail!("browse is interactive and does not support --json");
    }

    let store = ctx.storefront()?;
    let mut session = Session {
        store: &store,
        query: store.open_query(TimerScheduler::new()),
        selection: Selection::new(),
        cart: Cart::new(),
        selection_vendors: VendorMatchCache::new(),
        cart_vendors: VendorMatchCache::new(),
    };
    session.query.set_term(args.term);

    loop {
        let selection = &session.selection;
        print_view(&ctx.output, &session.query.view(), |p| selection.is_selected(&p.id));
        if !session.selection.is_empty() {
            ctx.output.kv("selected", &session.selection.len().to_string());
        }

        let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Search => {
                let term: String = Input::new()
                    .with_prompt("Search term")
                    .with_initial_text(session.query.session().term())
                    .allow_empty(true)
                    .interact_text()?;
                session.query.set_term(term);
            }
            Action::LoadMore => {
                if session.query.load_more() {
                    let spinner = ctx.output.spinner("Loading more products...");
                    session.query.settle().await;
                    spinner.finish_and_clear();
                } else {
                    ctx.output.info("Nothing more to load.");
                }
            }
            Action::Toggle => toggle_product(&mut session)?,
            Action::AddToCart => {
                for product_id in session.selection.product_ids().clone() {
                    if let Err(e) = session.cart.add_item(store.catalog(), &product_id, 1) {
                        ctx.output.warn(&format!("Skipped {}: {}", product_id, e));
                    }
                }
                ctx.output.success(&format!(
                    "Added {} product(s) to cart",
                    session.selection.len()
                ));
                session.selection.clear();
            }
            Action::SelectionVendors => {
                let ids = session.selection.product_ids().clone();
                let matches =
                    session
                        .selection_vendors
                        .get_or_compute(store.matcher(), store.catalog(), &ids);
                print_matches(&ctx.output, matches);
            }
            Action::CartVendors => {
                let ids = session.cart.product_ids();
                let matches = session
                    .cart_vendors
                    .get_or_compute(store.matcher(), store.catalog(), &ids);
                print_matches(&ctx.output, matches);
            }
            Action::ShowCart => {
                let subtotal = session.cart.subtotal(store.catalog())?;
                print_cart(&ctx.output, session.store, &session.cart, subtotal);
            }
            Action::Quit => break,
        }
    }

    ctx.output.debug(&format!(
        "vendor lookups computed: {} selection, {} cart",
        session.selection_vendors.computations(),
        session.cart_vendors.computations()
    ));
    Ok(())
}

fn toggle_product(session: &mut Session<'_>) -> Result<()> {
    let view = session.query.view();
    if view.items.is_empty() {
        return Ok(());
    }
    let labels: Vec<String> = view
        .items
        .iter()
        .map(|p| {
            let mark = if session.selection.is_selected(&p.id) { "[x]" } else { "[ ]" };
            format!("{} #{} {}", mark, p.id, p.name)
        })
        .collect();
    let index = Select::new()
        .with_prompt("Toggle which product?")
        .items(&labels)
        .default(0)
        .interact()?;
    let product_id = view.items[index].id.clone();
    session.selection.toggle(&product_id);
    Ok(())
}
