//! # Handles
//!
//! Permanent product ids are long and opaque, so the menu never asks for them.
//! Instead every product gets a short numeric [`Handle`] for the duration of a
//! session, and the [`HandleRegistry`] maps handles back to [`ProductId`]s.
//!
//! Handles are not persisted. Loading a catalog hands out `1..=N` in file
//! order; products added later get the next value of a counter that only ever
//! grows. A released handle is never issued again in the same session, so a
//! number the user saw earlier can not silently start pointing at a different
//! product.

use crate::model::ProductId;
use std::collections::BTreeMap;

/// A user-facing product handle (`1`, `2`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u32);

impl Handle {
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Handle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // Only the exact text a handle displays as: no sign, no leading zeros.
        let canonical = trimmed.bytes().all(|b| b.is_ascii_digit()) && !trimmed.starts_with('0');
        canonical
            .then(|| trimmed.parse::<u32>().ok())
            .flatten()
            .and_then(Handle::new)
            .ok_or_else(|| format!("Invalid handle format: {}", trimmed))
    }
}

/// Session-scoped mapping from handles to permanent ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandleRegistry {
    entries: BTreeMap<Handle, ProductId>,
    issued: u32,
}

impl HandleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&self, handle: Handle) -> Option<&ProductId> {
        self.entries.get(&handle)
    }

    /// Reserves the next handle without mapping it.
    pub fn allocate(&mut self) -> Handle {
        self.issued += 1;
        Handle(self.issued)
    }

    #[cfg(test)]
    pub(crate) fn register(&mut self, handle: Handle, id: ProductId) {
        self.issued = self.issued.max(handle.0);
        self.entries.insert(handle, id);
    }

    /// Allocates a handle and maps it to `id` in one step.
    pub fn assign(&mut self, id: ProductId) -> Handle {
        let handle = self.allocate();
        self.entries.insert(handle, id);
        handle
    }

    /// Drops the mapping for `handle`. Other handles keep their values.
    pub fn release(&mut self, handle: Handle) -> Option<ProductId> {
        self.entries.remove(&handle)
    }

    pub fn handle_of(&self, id: &ProductId) -> Option<Handle> {
        self.entries
            .iter()
            .find(|(_, mapped)| *mapped == id)
            .map(|(handle, _)| *handle)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending handle order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle, &ProductId)> + '_ {
        self.entries.iter().map(|(handle, id)| (*handle, id))
    }
}
