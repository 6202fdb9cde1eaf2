//! # Storage Layer
//!
//! The [`CatalogStore`] trait is the only thing the rest of the crate knows
//! about persistence. A catalog is read once when a session opens and written
//! once when the user saves; nothing is held open in between.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: the catalog file, a CSV table with the header
//!   `id,name,desc,price,quantity` and one row per product.
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! A store that has never been written reports
//! [`StockError::CatalogMissing`](crate::error::StockError::CatalogMissing)
//! on load. Callers decide whether that is fatal; the load command treats it
//! as an empty catalog.

use crate::error::Result;
use crate::model::Product;

pub mod fs;
pub mod memory;

pub trait CatalogStore {
    /// Reads every product, in stored order.
    fn load(&self) -> Result<Vec<Product>>;

    /// Replaces the stored catalog with `products`, in the given order.
    fn save(&mut self, products: &[Product]) -> Result<()>;

    /// Human-readable location, used in messages.
    fn describe(&self) -> String;
}
