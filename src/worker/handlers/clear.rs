use crate::{common::error::LedgerError, domain::ledger::Ledger};

// Unconditional; asking the user for confirmation is presentation-layer
// business.
pub fn handle(ledger: &mut Ledger) -> Result<(), LedgerError> {
    ledger.clear();
    Ok(())
}
