use super::CatalogStore;
use crate::error::{Result, StockError};
use crate::model::Product;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_FILE: &str = "db_products.csv";

const HEADER: [&str; 5] = ["id", "name", "desc", "price", "quantity"];

pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for CsvStore {
    fn load(&self) -> Result<Vec<Product>> {
        if !self.path.exists() {
            return Err(StockError::CatalogMissing(self.path.clone()));
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let products = reader
            .deserialize()
            .collect::<std::result::Result<Vec<Product>, csv::Error>>()?;

        tracing::debug!(path = %self.path.display(), rows = products.len(), "catalog loaded");
        Ok(products)
    }

    fn save(&mut self, products: &[Product]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Headers are written by hand so an empty catalog still gets one.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(HEADER)?;
        for product in products {
            writer.serialize(product)?;
        }
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), rows = products.len(), "catalog saved");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
