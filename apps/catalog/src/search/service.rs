//! Search orchestration — picks the AI, plain-text or manual path for one interaction.

use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::filter::{filter_products, text_search, FilterSet};
use crate::catalog::manual::ManualFilters;
use crate::catalog::models::Product;
use crate::catalog::Catalog;
use crate::search::extractor::FilterExtractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Structured filters extracted from the query.
    Ai,
    /// Substring fallback over the raw query.
    Text,
    /// Sidebar controls only.
    Manual,
}

#[derive(Debug, Serialize)]
pub struct SearchOutcome<'a> {
    pub mode: SearchMode,
    pub filters: Option<FilterSet>,
    pub summary: Option<String>,
    pub warning: Option<String>,
    pub count: usize,
    pub products: Vec<&'a Product>,
}

impl<'a> SearchOutcome<'a> {
    fn new(mode: SearchMode, products: Vec<&'a Product>) -> Self {
        Self {
            mode,
            filters: None,
            summary: None,
            warning: None,
            count: products.len(),
            products,
        }
    }
}

/// Runs one search.
///
/// A non-empty query goes through the extractor when one is configured, falling back to
/// plain-text search when extraction fails or yields nothing. An empty query applies the
/// manual filters, which the caller is expected to have validated.
pub async fn run_search<'a>(
    catalog: &'a Catalog,
    extractor: Option<&dyn FilterExtractor>,
    query: &str,
    manual: &ManualFilters,
) -> SearchOutcome<'a> {
    let query = query.trim();
    let products = catalog.products();

    if query.is_empty() {
        return SearchOutcome::new(SearchMode::Manual, manual.apply(products));
    }

    let Some(extractor) = extractor else {
        return SearchOutcome::new(SearchMode::Text, text_search(products, query));
    };

    match extractor.extract(query).await {
        Ok(Some(filters)) => {
            let summary = filters.summary();
            info!("Extracted filters for query {query:?}: {summary}");
            let mut outcome = SearchOutcome::new(
                SearchMode::Ai,
                filter_products(products, Some(&filters), query),
            );
            outcome.summary = Some(summary);
            outcome.filters = Some(filters);
            outcome
        }
        Ok(None) => SearchOutcome::new(SearchMode::Text, text_search(products, query)),
        Err(e) => {
            warn!("Filter extraction failed, falling back to text search: {e}");
            let mut outcome = SearchOutcome::new(SearchMode::Text, text_search(products, query));
            outcome.warning = Some(format!("processing error: {e}"));
            outcome
        }
    }
}
