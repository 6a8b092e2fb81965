use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Unknown Product";
pub const DEFAULT_CATEGORY: &str = "Uncategorized";
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// A catalog entry after load-time normalization. Every field is populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
    pub description: String,
}

/// A product record as it appears in the data file. Any field may be missing or null.
#[derive(Debug, Default, Deserialize)]
pub struct RawProduct {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub description: Option<String>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Product {
            name: raw.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            price: raw.price.unwrap_or(0.0),
            category: raw.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            rating: raw.rating.unwrap_or(0.0),
            description: raw
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
        }
    }
}

#[cfg(test)]
impl Product {
    /// Builds a product for tests with a description derived from the name.
    pub fn sample(name: &str, price: f64, category: &str, rating: f64) -> Self {
        Product {
            name: name.to_string(),
            price,
            category: category.to_string(),
            rating,
            description: format!("{name} description"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let raw: RawProduct = serde_json::from_str("{}").unwrap();
        let product = Product::from(raw);
        assert_eq!(product.name, DEFAULT_NAME);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.category, DEFAULT_CATEGORY);
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.description, DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let raw: RawProduct =
            serde_json::from_str(r#"{"name": null, "price": null, "rating": 4.5}"#).unwrap();
        let product = Product::from(raw);
        assert_eq!(product.name, DEFAULT_NAME);
        assert_eq!(product.price, 0.0);
        assert_eq!(product.rating, 4.5);
    }

    #[test]
    fn test_present_fields_are_kept() {
        let raw: RawProduct = serde_json::from_str(
            r#"{"name": "Red Sneaker", "price": 50, "category": "Shoes", "rating": 4, "description": "Light runner"}"#,
        )
        .unwrap();
        let product = Product::from(raw);
        assert_eq!(product.name, "Red Sneaker");
        assert_eq!(product.price, 50.0);
        assert_eq!(product.category, "Shoes");
        assert_eq!(product.description, "Light runner");
    }

    #[test]
    fn test_wrong_typed_field_is_rejected() {
        let result = serde_json::from_str::<RawProduct>(r#"{"price": "cheap"}"#);
        assert!(result.is_err());
    }
}
