use crate::catalog::Catalog;
use crate::commands::CmdResult;

pub fn run(catalog: &Catalog) -> CmdResult {
    let listed = catalog.summaries().map(|s| s.into_owned()).collect();
    CmdResult::default().with_listed_products(listed)
}
