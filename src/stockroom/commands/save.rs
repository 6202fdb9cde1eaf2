use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::CatalogStore;

pub fn run<S: CatalogStore>(store: &mut S, catalog: &Catalog) -> Result<CmdResult> {
    store.save(catalog.products())?;
    tracing::info!(location = %store.describe(), products = catalog.len(), "catalog written");
    Ok(CmdResult::default().with_message(CmdMessage::success("Ändringar har sparats.")))
}
