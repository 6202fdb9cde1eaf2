use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The permanent identifier of a product.
///
/// Ids read from a catalog file are kept verbatim, whatever their shape.
/// Ids minted in a session are random v4 UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A catalog row. Field names match the CSV header (`id,name,desc,price,quantity`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub desc: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    pub fn new(name: String, desc: String, price: f64, quantity: u32) -> Self {
        Self {
            id: ProductId::generate(),
            name,
            desc,
            price,
            quantity,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ProductId::new(id);
        self
    }
}
