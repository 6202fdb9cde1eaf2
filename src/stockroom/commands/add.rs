use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, ProductDraft};
use crate::error::{Result, StockError};
use crate::model::Product;

/// Validates the draft and appends it. Nothing is touched unless every field
/// parses.
pub fn run(catalog: &mut Catalog, draft: &ProductDraft) -> Result<CmdResult> {
    let name = draft.name.trim();
    let price = parse_price(&draft.price)?;
    let quantity = parse_quantity(&draft.quantity)?;

    let product = Product::new(name.to_string(), draft.desc.trim().to_string(), price, quantity);
    let handle = catalog.insert(product.clone())?;
    tracing::debug!(%handle, id = %product.id, "product added");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Produkten '{}' har lagts till.",
            product.name
        )))
        .with_assigned_handle(handle)
        .with_affected_products(vec![product]))
}

/// Accepts `.` or, when no `.` is present, `,` as the decimal separator.
///
/// A `,` followed by exactly three digits (`1,000`) reads as either a
/// thousands group or a decimal fraction, so it is rejected.
pub fn parse_price(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else if is_grouped_thousands(trimmed) {
        return Err(StockError::InvalidInput(format!("ambiguous price: {}", trimmed)));
    } else {
        trimmed.replacen(',', ".", 1)
    };

    match normalized.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err(StockError::InvalidInput(format!("price: {}", trimmed))),
    }
}

fn is_grouped_thousands(text: &str) -> bool {
    text.split_once(',')
        .is_some_and(|(_, fraction)| fraction.len() == 3 && fraction.bytes().all(|b| b.is_ascii_digit()))
}

pub fn parse_quantity(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| StockError::InvalidInput(format!("quantity: {}", trimmed)))
}
