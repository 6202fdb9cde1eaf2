use crate::catalog::{Catalog, DisplayProduct};
use crate::commands::{CmdMessage, CmdResult, NOT_FOUND};
use crate::index::Handle;

/// Looks up one product by handle. Unknown handles and handles whose product
/// is gone both come back as "not found".
pub fn run(catalog: &Catalog, handle: Handle) -> CmdResult {
    let Some(product) = catalog.get(handle) else {
        tracing::debug!(%handle, "view: handle not found");
        return CmdResult::default().with_message(CmdMessage::error(NOT_FOUND));
    };

    let position = catalog
        .products()
        .iter()
        .position(|p| p.id == product.id)
        .map_or(0, |i| i + 1);

    CmdResult::default().with_listed_products(vec![DisplayProduct {
        position,
        handle: Some(handle),
        product: product.clone(),
    }])
}
