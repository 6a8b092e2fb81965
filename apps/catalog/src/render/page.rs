//! Catalog page — search box, sidebar filters and the two-column result grid.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::catalog::manual::{
    ManualFilters, ALL_CATEGORIES, PRICE_CEILING, PRICE_FLOOR, RATING_CEILING, RATING_FLOOR,
};
use crate::catalog::models::Product;
use crate::search::service::SearchOutcome;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #1a202c; color: #e2e8f0; margin: 0; }
.layout { display: flex; gap: 2rem; padding: 1.5rem; }
.sidebar { width: 260px; flex-shrink: 0; }
.sidebar label { display: block; margin: 0.8rem 0 0.3rem; }
.main { flex: 1; }
.search-bar input[type=text] { width: 70%; padding: 0.5rem; }
.busy { margin: 1rem 0; color: #90cdf4; }
.warning { background: #744210; padding: 0.8rem 1rem; border-radius: 8px; margin-bottom: 1rem; }
.filter-summary { background: #2d3748; padding: 1rem; border-radius: 10px; margin-bottom: 1.5rem; border: 1px solid #4a5568; }
.suggestions { background: #1a365d; padding: 1rem; border-radius: 10px; border-left: 4px solid #4299e1; }
.row { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.product-card { background: #2d3748; padding: 1.5rem; border-radius: 12px; margin-bottom: 1.5rem; border-left: 4px solid #4299e1; }
.product-title { font-size: 1.4rem; font-weight: bold; color: #fff; margin-bottom: 0.8rem; }
.product-price { font-size: 1.5rem; font-weight: bold; color: #48bb78; margin-bottom: 0.8rem; }
.product-category { background: #3182ce; padding: 0.4rem 0.8rem; border-radius: 20px; font-size: 0.85rem; display: inline-block; margin-bottom: 0.8rem; }
.product-rating { color: #fed7d7; font-size: 0.9rem; }
.product-description { font-size: 0.95rem; line-height: 1.5; }
"#;

const SUGGESTIONS: [&str; 3] = [
    "Try broader search terms",
    "Check available categories in the sidebar",
    "Adjust price range or rating filters",
];

const BUSY_MESSAGE: &str = "🤖 Processing your request with AI...";

/// Reveals the busy indicator while the completion call runs.
const SHOW_BUSY: &str = "document.getElementById('busy').hidden = false";

/// Everything the page needs for one render.
pub struct PageView<'a> {
    pub query: &'a str,
    pub manual: &'a ManualFilters,
    pub categories: &'a [String],
    pub ai_enabled: bool,
    /// `None` until a search has been submitted.
    pub outcome: Option<&'a SearchOutcome<'a>>,
}

pub fn render_page(view: &PageView<'_>) -> Markup {
    let on_submit = view.ai_enabled.then_some(SHOW_BUSY);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Product Catalog" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                form method="get" action="/" onsubmit=[on_submit] {
                    div class="layout" {
                        (render_sidebar(view))
                        div class="main" {
                            h1 { "Product Catalog" }
                            @if !view.ai_enabled {
                                div class="warning" {
                                    "⚠️ AI search is disabled. Set OPENAI_API_KEY to enable it; "
                                    "text search and sidebar filters still work."
                                }
                            }
                            div class="search-bar" {
                                input type="text" name="q" placeholder="🔍 Search products" value=(view.query);
                                " "
                                button type="submit" name="submit" value="search" { "Search" }
                            }
                            @if view.ai_enabled {
                                div id="busy" class="busy" hidden { (BUSY_MESSAGE) }
                            }
                            @if let Some(outcome) = view.outcome {
                                (render_results(outcome))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_sidebar(view: &PageView<'_>) -> Markup {
    let manual = view.manual;
    let categories =
        std::iter::once(ALL_CATEGORIES).chain(view.categories.iter().map(String::as_str));

    html! {
        aside class="sidebar" {
            h2 { "Filters" }
            label for="category" { "Category" }
            select id="category" name="category" {
                @for category in categories {
                    option value=(category) selected[category == manual.category] { (category) }
                }
            }
            label { "Price Range" }
            input type="number" name="min_price" min=(PRICE_FLOOR) max=(PRICE_CEILING) step="1" value=(manual.min_price);
            " – "
            input type="number" name="max_price" min=(PRICE_FLOOR) max=(PRICE_CEILING) step="1" value=(manual.max_price);
            label for="min_rating" { "Minimum Rating: " (format!("{:.1}", manual.min_rating)) }
            input type="range" id="min_rating" name="min_rating" min=(RATING_FLOOR) max=(RATING_CEILING) step="0.1" value=(format!("{:.1}", manual.min_rating));
        }
    }
}

fn render_results(outcome: &SearchOutcome<'_>) -> Markup {
    html! {
        @if let Some(warning) = &outcome.warning {
            div class="warning" { (warning) }
        }
        @if let Some(summary) = &outcome.summary {
            div class="filter-summary" { (summary) }
        }
        h2 { "📋 Results (" (outcome.count) " found)" }
        @if outcome.products.is_empty() {
            div class="warning" {
                "😔 No products found matching your criteria. Try adjusting your search."
            }
            div class="suggestions" {
                "💡 " strong { "Suggestions:" }
                ul {
                    @for suggestion in SUGGESTIONS {
                        li { (suggestion) }
                    }
                }
            }
        } @else {
            @for pair in outcome.products.chunks(2) {
                div class="row" {
                    @for product in pair {
                        (render_card(product))
                    }
                }
            }
        }
    }
}

/// One product card: name, price, category badge, stars and description.
pub fn render_card(product: &Product) -> Markup {
    html! {
        div class="product-card" {
            div class="product-title" { (product.name) }
            div class="product-price" { (format_price(product.price)) }
            span class="product-category" { (product.category) }
            div class="product-rating" {
                strong { "Rating:" } " " (stars(product.rating)) " (" (product.rating) "/5)"
            }
            p class="product-description" { (product.description) }
        }
    }
}

pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// One star per whole rating point, rounded down and capped at the rating ceiling.
pub fn stars(rating: f64) -> String {
    let whole = if rating.is_finite() {
        rating.clamp(0.0, RATING_CEILING).floor() as usize
    } else {
        0
    };
    "⭐".repeat(whole)
}
