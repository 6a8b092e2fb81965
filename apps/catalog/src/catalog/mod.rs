//! Catalog — the immutable product collection loaded once at startup.

pub mod filter;
pub mod manual;
pub mod models;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use self::models::{Product, RawProduct};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read product data file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("product data file {path} is not a valid JSON product array: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The process-wide product list plus the category index used by the category select.
/// Never mutated after construction; shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
        categories.sort();
        categories.dedup();

        Self {
            products,
            categories,
        }
    }

    /// Reads and normalizes the product data file. Any failure is fatal to startup.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<RawProduct> =
            serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::new(records.into_iter().map(Product::from).collect());
        info!(
            "Loaded {} products in {} categories from {}",
            catalog.products.len(),
            catalog.categories.len(),
            path.display()
        );

        Ok(catalog)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}
