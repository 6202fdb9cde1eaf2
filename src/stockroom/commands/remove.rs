use crate::catalog::{Catalog, Removal};
use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::index::Handle;

pub fn run(catalog: &mut Catalog, handle: Handle) -> CmdResult {
    match catalog.remove(handle) {
        Removal::Removed(product) => {
            tracing::debug!(%handle, id = %product.id, "product removed");
            CmdResult::default()
                .with_message(CmdMessage::success(format!(
                    "Produkten '{}' har tagits bort.",
                    product.name
                )))
                .with_affected_products(vec![product])
        }
        Removal::Unknown => CmdResult::default().with_message(CmdMessage::error(NOT_FOUND)),
        Removal::Orphaned(id) => {
            tracing::warn!(%handle, %id, "handle points at a product that is not in the catalog");
            CmdResult::default().with_message(CmdMessage::error(NOT_FOUND))
        }
    }
}
