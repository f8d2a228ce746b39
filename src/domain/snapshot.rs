use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{error::LedgerError, money::Money};
use crate::domain::product::Product;

/// Persisted form of the ledger state.
///
/// This is the stored payload, not the live types: prices travel as
/// 4-decimal-place strings and the id counter as a plain integer that is
/// only validated on restore. Key names match the original stored document
/// (`costPrice`, `salePrice`, `idCounter`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub products: Vec<StoredProduct>,
    #[serde(rename = "idCounter")]
    pub id_counter: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProduct {
    pub id: u64,
    pub name: String,
    pub cost_price: String,
    pub sale_price: String,
    pub stock: u32,
    pub sold: u32,
}

impl From<&Product> for StoredProduct {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            cost_price: product.cost_price.to_string_4dp(),
            sale_price: product.sale_price.to_string_4dp(),
            stock: product.stock,
            sold: product.sold,
        }
    }
}

impl TryFrom<StoredProduct> for Product {
    type Error = LedgerError;

    fn try_from(stored: StoredProduct) -> Result<Self, Self::Error> {
        let cost_price = Money::from_str(&stored.cost_price).map_err(|e| {
            LedgerError::Restore(format!("product {}: bad cost price: {e}", stored.id))
        })?;
        let sale_price = Money::from_str(&stored.sale_price).map_err(|e| {
            LedgerError::Restore(format!("product {}: bad sale price: {e}", stored.id))
        })?;

        Ok(Product {
            id: stored.id,
            name: stored.name,
            cost_price,
            sale_price,
            stock: stored.stock,
            sold: stored.sold,
        })
    }
}
