use crate::{
    common::{command::Command, error::LedgerError},
    domain::ledger::Ledger,
    worker::handlers::{add, adjust_sold, clear, remove},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(&mut self, ledger: &mut Ledger, command: Command) -> Result<(), LedgerError> {
        match command {
            Command::Add(draft) => {
                add::handle(ledger, draft)?;
            }
            Command::AdjustSold { id, delta } => {
                adjust_sold::handle(ledger, id, delta)?;
            }
            Command::Remove { id } => {
                remove::handle(ledger, id)?;
            }
            Command::Clear => {
                clear::handle(ledger)?;
            }
        }
        Ok(())
    }
}
