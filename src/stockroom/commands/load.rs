use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockError};
use crate::store::CatalogStore;

/// Opens a session's catalog. A missing catalog is reported and replaced by
/// an empty one; any other failure is returned.
pub fn run<S: CatalogStore>(store: &S) -> Result<(Catalog, CmdResult)> {
    let mut result = CmdResult::default();

    let products = match store.load() {
        Ok(products) => products,
        Err(StockError::CatalogMissing(path)) => {
            tracing::warn!(path = %path.display(), "catalog file missing, starting empty");
            result.add_message(CmdMessage::warning(format!(
                "Filen {} hittades inte.",
                path.display()
            )));
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    let catalog = Catalog::from_products(products)?;
    Ok((catalog, result))
}
