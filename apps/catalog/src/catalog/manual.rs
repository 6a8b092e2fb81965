//! Manual filters — the sidebar controls. Never consults the extractor.

use serde::{Deserialize, Serialize};

use crate::catalog::models::Product;
use crate::errors::AppError;

/// Category select value meaning "no category constraint".
pub const ALL_CATEGORIES: &str = "All";
pub const PRICE_FLOOR: f64 = 0.0;
pub const PRICE_CEILING: f64 = 1000.0;
pub const RATING_FLOOR: f64 = 1.0;
pub const RATING_CEILING: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualFilters {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_min_price")]
    pub min_price: f64,
    #[serde(default = "default_max_price")]
    pub max_price: f64,
    #[serde(default = "default_min_rating")]
    pub min_rating: f64,
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

fn default_min_price() -> f64 {
    PRICE_FLOOR
}

fn default_max_price() -> f64 {
    PRICE_CEILING
}

fn default_min_rating() -> f64 {
    RATING_FLOOR
}

impl Default for ManualFilters {
    fn default() -> Self {
        Self {
            category: default_category(),
            min_price: default_min_price(),
            max_price: default_max_price(),
            min_rating: default_min_rating(),
        }
    }
}

impl ManualFilters {
    /// Rejects values the sidebar controls could never produce.
    pub fn validate(&self) -> Result<(), AppError> {
        let in_price_range = |v: f64| (PRICE_FLOOR..=PRICE_CEILING).contains(&v);

        if !in_price_range(self.min_price) || !in_price_range(self.max_price) {
            return Err(AppError::Validation(format!(
                "price range must lie within {PRICE_FLOOR}..={PRICE_CEILING}"
            )));
        }
        if self.min_price > self.max_price {
            return Err(AppError::Validation(
                "min_price cannot exceed max_price".to_string(),
            ));
        }
        if !(RATING_FLOOR..=RATING_CEILING).contains(&self.min_rating) {
            return Err(AppError::Validation(format!(
                "min_rating must lie within {RATING_FLOOR}..={RATING_CEILING}"
            )));
        }
        Ok(())
    }

    fn matches(&self, product: &Product) -> bool {
        (self.category == ALL_CATEGORIES || product.category == self.category)
            && self.min_price <= product.price
            && product.price <= self.max_price
            && product.rating >= self.min_rating
    }

    /// Applies all three controls conjunctively, preserving order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
