use std::str::FromStr;

use crate::{
    common::{
        command::ProductDraft,
        error::{Field, LedgerError},
        money::Money,
    },
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, draft: ProductDraft) -> Result<u64, LedgerError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(LedgerError::Validation {
            field: Field::Name,
            reason: "must not be empty".to_string(),
        });
    }

    let cost_price = parse_price(&draft.cost_price, Field::CostPrice)?;
    let sale_price = parse_price(&draft.sale_price, Field::SalePrice)?;
    let stock = parse_count(&draft.stock, Field::Stock)?;
    let sold = parse_count(&draft.sold, Field::Sold)?;

    if sold > stock {
        return Err(LedgerError::Validation {
            field: Field::Sold,
            reason: format!("{sold} sold exceeds stock of {stock}"),
        });
    }

    // Nothing was mutated until every field checked out; the counter only
    // advances here.
    let product = ledger.insert(name.to_string(), cost_price, sale_price, stock, sold);
    Ok(product.id)
}

fn parse_price(raw: &str, field: Field) -> Result<Money, LedgerError> {
    let price = Money::from_str(raw).map_err(|e| LedgerError::Validation {
        field,
        reason: e.to_string(),
    })?;
    if price < Money::zero() {
        return Err(LedgerError::Validation {
            field,
            reason: "must not be negative".to_string(),
        });
    }
    Ok(price)
}

fn parse_count(raw: &str, field: Field) -> Result<u32, LedgerError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|e| LedgerError::Validation {
            field,
            reason: e.to_string(),
        })
}
