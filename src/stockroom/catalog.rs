//! # Catalog
//!
//! The in-memory state of a session: the ordered product collection together
//! with the [`HandleRegistry`] that points into it. Both halves live in one
//! value and are only mutated through its methods, so an insert or a removal
//! always touches the collection and the registry together.
//!
//! Lookups by permanent id are linear scans. Catalogs are small (a shop
//! shelf, not a warehouse) and scanning keeps file order trivially intact.

use crate::error::{Result, StockError};
use crate::index::{Handle, HandleRegistry};
use crate::model::{Product, ProductId};
use std::collections::HashSet;

/// A product as it appears in a listing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductSummary<'a> {
    /// 1-based position in collection order.
    pub position: usize,
    /// `None` only if the registry lost track of the product.
    pub handle: Option<Handle>,
    pub product: &'a Product,
}

impl ProductSummary<'_> {
    pub fn into_owned(self) -> DisplayProduct {
        DisplayProduct {
            position: self.position,
            handle: self.handle,
            product: self.product.clone(),
        }
    }
}

/// Owned counterpart of [`ProductSummary`], carried in command results.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayProduct {
    pub position: usize,
    pub handle: Option<Handle>,
    pub product: Product,
}

/// Iterator returned by [`Catalog::summaries`].
pub struct Summaries<'a> {
    products: std::iter::Enumerate<std::slice::Iter<'a, Product>>,
    handles: &'a HandleRegistry,
}

impl<'a> Iterator for Summaries<'a> {
    type Item = ProductSummary<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.products.next().map(|(i, product)| ProductSummary {
            position: i + 1,
            handle: self.handles.handle_of(&product.id),
            product,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.products.size_hint()
    }
}

/// Outcome of [`Catalog::remove`].
#[derive(Debug, Clone, PartialEq)]
pub enum Removal {
    Removed(Product),
    /// The handle was never issued or has been released.
    Unknown,
    /// The handle resolves, but no product carries that id. The mapping is kept.
    Orphaned(ProductId),
}

/// Report from [`Catalog::repair`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    pub released_orphans: usize,
    pub registered_products: usize,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.released_orphans == 0 && self.registered_products == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    handles: HandleRegistry,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from rows in file order, handing out `1..=N`.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(StockError::DuplicateId(product.id.to_string()));
            }
        }

        let mut handles = HandleRegistry::new();
        for product in &products {
            handles.assign(product.id.clone());
        }

        Ok(Self { products, handles })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn handles(&self) -> &HandleRegistry {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// A fresh pass over the collection each time it is called.
    pub fn summaries(&self) -> Summaries<'_> {
        Summaries {
            products: self.products.iter().enumerate(),
            handles: &self.handles,
        }
    }

    pub fn get(&self, handle: Handle) -> Option<&Product> {
        let id = self.handles.resolve(handle)?;
        self.products.iter().find(|p| &p.id == id)
    }

    /// Appends `product` and registers a new handle for it.
    pub fn insert(&mut self, product: Product) -> Result<Handle> {
        if self.products.iter().any(|p| p.id == product.id) {
            return Err(StockError::DuplicateId(product.id.to_string()));
        }
        let handle = self.handles.assign(product.id.clone());
        self.products.push(product);
        Ok(handle)
    }

    pub fn remove(&mut self, handle: Handle) -> Removal {
        let Some(id) = self.handles.resolve(handle) else {
            return Removal::Unknown;
        };
        let Some(pos) = self.products.iter().position(|p| &p.id == id) else {
            return Removal::Orphaned(id.clone());
        };

        let product = self.products.remove(pos);
        self.handles.release(handle);
        Removal::Removed(product)
    }

    /// Maps `handle` to `id` without touching the products, leaving the two
    /// halves out of step.
    #[cfg(test)]
    pub(crate) fn map_handle(&mut self, handle: Handle, id: ProductId) {
        self.handles.register(handle, id);
    }

    /// Releases handles that point at nothing and registers products that
    /// have no handle.
    pub fn repair(&mut self) -> DoctorReport {
        let mut report = DoctorReport::default();

        let orphans: Vec<Handle> = self
            .handles
            .iter()
            .filter(|(_, id)| !self.products.iter().any(|p| &p.id == *id))
            .map(|(handle, _)| handle)
            .collect();
        for handle in orphans {
            self.handles.release(handle);
            report.released_orphans += 1;
        }

        for product in &self.products {
            if self.handles.handle_of(&product.id).is_none() {
                self.handles.assign(product.id.clone());
                report.registered_products += 1;
            }
        }

        report
    }
}
