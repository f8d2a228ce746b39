use crate::{common::error::LedgerError, domain::ledger::Ledger};

pub fn handle(ledger: &mut Ledger, id: u64, delta: i64) -> Result<(), LedgerError> {
    // Unknown ids are ignored, matching removal semantics.
    let Some(product) = ledger.get_mut(id) else {
        return Ok(());
    };

    let candidate = i64::from(product.sold).saturating_add(delta);
    if candidate < 0 || candidate > i64::from(product.stock) {
        return Err(LedgerError::InvalidQuantity {
            candidate,
            stock: product.stock,
        });
    }

    product.sold = candidate as u32;
    Ok(())
}
