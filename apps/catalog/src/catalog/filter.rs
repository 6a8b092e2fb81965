//! Product Filter — applies a structured `FilterSet`, or falls back to plain-text search.
//!
//! Every criterion is optional and the criteria combine conjunctively. Matching is raw
//! substring containment after lowercasing; there is no ranking, so the input order is
//! always preserved.

use serde::{Deserialize, Serialize};

use crate::catalog::models::Product;

/// Structured constraints derived from a free-text query. Absent criteria impose nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub max_price: Option<f64>,
    #[serde(default)]
    pub min_price: Option<f64>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
}

impl FilterSet {
    /// Lowercased category constraint; an empty string is treated as absent.
    fn category_needle(&self) -> Option<String> {
        self.category
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase)
    }

    fn keyword_needles(&self) -> Vec<String> {
        self.keywords
            .iter()
            .flatten()
            .map(|k| k.to_lowercase())
            .collect()
    }

    /// Human-readable description of the active criteria, e.g.
    /// `Category: shoes | Max Price: $60 | Keywords: red, running`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            parts.push(format!("Category: {category}"));
        }
        // Zero bounds still filter but are left out of the summary.
        if let Some(max_price) = self.max_price.filter(|v| *v != 0.0) {
            parts.push(format!("Max Price: ${max_price}"));
        }
        if let Some(min_price) = self.min_price.filter(|v| *v != 0.0) {
            parts.push(format!("Min Price: ${min_price}"));
        }
        if let Some(min_rating) = self.min_rating.filter(|v| *v != 0.0) {
            parts.push(format!("Min Rating: {min_rating} stars"));
        }
        if let Some(keywords) = self.keywords.as_ref().filter(|k| !k.is_empty()) {
            parts.push(format!("Keywords: {}", keywords.join(", ")));
        }

        if parts.is_empty() {
            "General search".to_string()
        } else {
            parts.join(" | ")
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Returns the products matching `filters`, or the plain-text fallback when `filters` is `None`.
///
/// Fallback: an empty query returns everything; otherwise a product matches when the
/// lowercased query occurs in its name, description or category.
pub fn filter_products<'a>(
    products: &'a [Product],
    filters: Option<&FilterSet>,
    query: &str,
) -> Vec<&'a Product> {
    let Some(filters) = filters else {
        return text_search(products, query);
    };

    let category = filters.category_needle();
    let keywords = filters.keyword_needles();

    products
        .iter()
        .filter(|p| {
            category
                .as_deref()
                .map_or(true, |c| contains_ci(&p.category, c))
        })
        .filter(|p| filters.max_price.map_or(true, |max| p.price <= max))
        .filter(|p| filters.min_price.map_or(true, |min| p.price >= min))
        .filter(|p| filters.min_rating.map_or(true, |min| p.rating >= min))
        .filter(|p| {
            keywords
                .iter()
                .all(|k| contains_ci(&p.name, k) || contains_ci(&p.description, k))
        })
        .collect()
}

/// Plain-text fallback over name, description and category.
pub fn text_search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    if query.is_empty() {
        return products.iter().collect();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            contains_ci(&p.name, &needle)
                || contains_ci(&p.description, &needle)
                || contains_ci(&p.category, &needle)
        })
        .collect()
}
