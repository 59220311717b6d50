//! Search the catalog, loading pages through the timer scheduler.

use anyhow::Result;
use serde::Serialize;
use storefront_commerce::catalog::Product;
use storefront_commerce::schedule::TimerScheduler;
use storefront_commerce::search::{ListStatus, Pagination, QueryView, ResultSummary};
use storefront_commerce::Storefront;

use super::SearchArgs;
use crate::context::Context;
use crate::output::{status_badge, Output};

#[derive(Serialize)]
struct SearchReport<'a> {
    summary: ResultSummary,
    status: ListStatus,
    pagination: Pagination,
    items: &'a [Product],
}

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let mut config = ctx.config.storefront.clone();
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
    let store = Storefront::seeded(config)?;
    let mut query = store.open_query(TimerScheduler::new());

    query.set_term(args.term.as_str());
    ctx.output.debug(&format!(
        "{} of {} matches on page 1",
        query.view().items.len(),
        query.view().total_count
    ));

    for _ in 0..args.pages {
        if !query.load_more() {
            ctx.output.debug("No more pages to load");
            break;
        }
        let spinner = ctx.output.spinner(&format!("Loading page {}...", query.session().page() + 1));
        query.settle().await;
        spinner.finish_and_clear();
    }

    let view = query.view();
    if ctx.output.is_json() {
        ctx.output.json(&SearchReport {
            summary: view.summary(),
            status: view.status(),
            pagination: view.pagination(),
            items: view.items,
        });
        return Ok(());
    }

    print_view(&ctx.output, &view, |_| false);
    Ok(())
}

/// Print a result list with its summary and footer.
pub fn print_view(output: &Output, view: &QueryView<'_>, is_selected: impl Fn(&Product) -> bool) {
    output.header(&view.summary().to_string());
    for product in view.items {
        output.product(product, is_selected(product));
    }
    let pagination = view.pagination();
    output.info(&format!(
        "Showing {} of {} (page {}/{}) - {}",
        view.items.len(),
        view.total_count,
        pagination.page.min(pagination.total_pages),
        pagination.total_pages,
        status_badge(view.status())
    ));
}
