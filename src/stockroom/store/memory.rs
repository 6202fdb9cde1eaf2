use super::CatalogStore;
use crate::error::{Result, StockError};
use crate::model::Product;
use std::path::PathBuf;

/// Keeps the "file" in memory. A store that has never been saved behaves like
/// a missing catalog file.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    products: Option<Vec<Product>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Some(products),
        }
    }

    pub fn saved(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Product>> {
        self.products
            .clone()
            .ok_or_else(|| StockError::CatalogMissing(PathBuf::from(self.describe())))
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        self.products = Some(products.to_vec());
        Ok(())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}
