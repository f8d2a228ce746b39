use crate::{common::error::LedgerError, domain::ledger::Ledger};

pub fn handle(ledger: &mut Ledger, id: u64) -> Result<(), LedgerError> {
    ledger.remove(id);
    Ok(())
}
