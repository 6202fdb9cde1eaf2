//! # API Facade
//!
//! [`StockApi`] is a session: it owns the store and the [`Catalog`] loaded
//! from it, and every operation the menu offers goes through one of its
//! methods. It is the only owner of the catalog, so there is no shared or
//! global state to keep in sync.
//!
//! The facade normalizes input (handle text to [`Handle`]) and dispatches to
//! `commands/*.rs`. It does no printing and holds no business logic.
//!
//! `StockApi<S: CatalogStore>` is generic over storage:
//! - Production: `StockApi<CsvStore>`
//! - Testing: `StockApi<InMemoryStore>`

use crate::catalog::Catalog;
use crate::commands::{self, CmdMessage, CmdResult, ProductDraft, NOT_FOUND};
use crate::error::{Result, StockError};
use crate::index::Handle;
use crate::store::CatalogStore;
use std::str::FromStr;

pub struct StockApi<S: CatalogStore> {
    store: S,
    catalog: Catalog,
}

impl<S: CatalogStore> StockApi<S> {
    /// Loads the catalog. Messages from loading (a missing file, say) come
    /// back alongside the session.
    pub fn open(store: S) -> Result<(Self, CmdResult)> {
        let (catalog, result) = commands::load::run(&store)?;
        tracing::debug!(location = %store.describe(), products = catalog.len(), "session opened");
        Ok((Self { store, catalog }, result))
    }

    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.catalog)
    }

    pub fn view(&self, input: &str) -> CmdResult {
        match parse_handle(input) {
            Ok(handle) => commands::view::run(&self.catalog, handle),
            Err(_) => not_found(),
        }
    }

    pub fn add(&mut self, draft: &ProductDraft) -> Result<CmdResult> {
        commands::add::run(&mut self.catalog, draft)
    }

    pub fn remove(&mut self, input: &str) -> CmdResult {
        match parse_handle(input) {
            Ok(handle) => commands::remove::run(&mut self.catalog, handle),
            Err(_) => not_found(),
        }
    }

    pub fn doctor(&mut self) -> CmdResult {
        commands::doctor::run(&mut self.catalog)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::save::run(&mut self.store, &self.catalog)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn parse_handle(input: &str) -> Result<Handle> {
    Handle::from_str(input).map_err(|e| {
        tracing::debug!(input, "unparsable handle");
        StockError::InvalidHandle(e)
    })
}

fn not_found() -> CmdResult {
    CmdResult::default().with_message(CmdMessage::error(NOT_FOUND))
}

pub use crate::catalog::{DisplayProduct, DoctorReport, ProductSummary};
pub use crate::commands::MessageLevel;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;
    use crate::store::memory::InMemoryStore;

    fn api() -> StockApi<InMemoryStore> {
        let store = InMemoryStore::with_products(vec![
            Product::new("Cable".into(), "USB-C".into(), 9.99, 5).with_id("a"),
            Product::new("Mouse".into(), "Wireless".into(), 249.0, 2).with_id("b"),
            Product::new("Screen".into(), "24 inch".into(), 1999.0, 1).with_id("c"),
        ]);
        StockApi::open(store).unwrap().0
    }

    #[test]
    fn view_dispatches_with_parsed_handle() {
        let api = api();
        let result = api.view(" 2 ");
        assert_eq!(result.listed_products[0].product.name, "Mouse");
    }

    #[test]
    fn garbage_handles_are_not_found() {
        let mut api = api();
        for input in ["", "abc", "0", "-1"] {
            assert!(api.view(input).is_not_found());
            assert!(api.remove(input).is_not_found());
        }
        assert_eq!(api.catalog().len(), 3);
    }

    #[test]
    fn remove_then_save_persists() {
        let mut api = api();
        api.remove("1");
        api.save().unwrap();

        let store = api.into_store();
        let names: Vec<_> = store.saved().unwrap().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["Mouse", "Screen"]);
    }

    #[test]
    fn list_follows_mutations() {
        let mut api = api();
        assert_eq!(api.list().listed_products.len(), 3);
        api.add(&ProductDraft::new("Plug", "", "1", "1")).unwrap();
        assert_eq!(api.list().listed_products.len(), 4);
    }

    #[test]
    fn padded_or_signed_handles_are_never_issued() {
        let mut api = api();
        let before = api.catalog().clone();

        for input in ["01", "001", "+1", "02"] {
            assert!(api.view(input).is_not_found(), "view {:?}", input);
            let result = api.remove(input);
            assert!(result.is_not_found(), "remove {:?}", input);
            assert!(result.affected_products.is_empty());
        }
        assert_eq!(api.catalog(), &before);
    }

    #[test]
    fn open_missing_store_is_empty() {
        let (api, result) = StockApi::open(InMemoryStore::new()).unwrap();
        assert!(api.catalog().is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }
}
