//! Output formatting for the CLI.

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use storefront_commerce::catalog::{Product, Rating};
use storefront_commerce::search::ListStatus;

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print one product card as a line.
    pub fn product(&self, product: &Product, selected: bool) {
        if self.json {
            return;
        }
        let marker = if selected {
            style("[x]").green().to_string()
        } else {
            style("[ ]").dim().to_string()
        };
        println!(
            "  {} {} {}  {}  {}",
            marker,
            style(format!("#{:<3}", product.id.as_str())).dim(),
            product.name,
            price_label(product),
            rating_label(&product.rating, product.review_count),
        );
    }

    /// Create a spinner for indeterminate progress.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Footer line for the product list.
pub fn status_badge(status: ListStatus) -> String {
    match status {
        ListStatus::Empty => style("no products found").dim().to_string(),
        ListStatus::Loading => style("loading...").yellow().to_string(),
        ListStatus::HasMore => style("more available").cyan().to_string(),
        ListStatus::Exhausted => style("end of list").green().to_string(),
    }
}

/// Price with the struck original and discount, when there is one.
pub fn price_label(product: &Product) -> String {
    match (&product.original_price, product.discount_percent()) {
        (Some(original), Some(percent)) => format!(
            "{} {} {}",
            style(product.price.to_string()).bold(),
            style(original.to_string()).dim().strikethrough(),
            style(format!("-{}%", percent)).red()
        ),
        _ => style(product.price.to_string()).bold().to_string(),
    }
}

/// Five-star rendering of a rating.
pub fn rating_label(rating: &Rating, reviews: u32) -> String {
    let stars = rating.stars();
    format!(
        "{}{}{} {:.1} ({})",
        "★".repeat(usize::from(stars.full)),
        "⯪".repeat(usize::from(stars.half)),
        "☆".repeat(usize::from(stars.empty)),
        rating.value(),
        reviews
    )
}
