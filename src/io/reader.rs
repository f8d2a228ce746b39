use crate::common::command::{Command, ProductDraft};
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Only the
/// columns relevant to a row's action are filled; the rest stay blank.
struct CsvRow {
    action: String,
    name: Option<String>,
    cost_price: Option<String>,
    sale_price: Option<String>,
    stock: Option<String>,
    sold: Option<String>,
    id: Option<u64>,
    delta: Option<i64>,
}

/// Reads and validates command rows from a CSV reader.
///
/// Supported headers: `action,name,cost_price,sale_price,stock,sold,id,delta`.
/// Normalizes the `action` field to lowercase. `add` rows pass their raw
/// field strings through untouched (the add handler validates them);
/// `adjust` requires `id` and `delta`, `remove` requires `id`. Errors
/// include row context.
///
/// # Examples
///
/// ```
/// use inventory_ledger::io::reader::read_commands;
/// use inventory_ledger::common::command::Command;
/// use csv::ReaderBuilder;
///
/// let data = "action,name,cost_price,sale_price,stock,sold,id,delta\n\
/// add,Widget,2.50,5.00,10,3,,\n\
/// adjust,,,,,,1,-1\n";
/// let mut rdr = ReaderBuilder::new().flexible(true).from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(Command::Add(_))));
/// assert!(matches!(commands[1], Ok(Command::AdjustSold { id: 1, delta: -1 })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Command, String>> + '_ {
    // Map each CSV row into a domain `Command`, normalizing the action
    // name and requiring the id/delta columns where the action needs them.
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let action = row.action.trim().to_ascii_lowercase();

        match action.as_str() {
            "add" => Ok(Command::Add(ProductDraft {
                name: row.name.unwrap_or_default(),
                cost_price: row.cost_price.unwrap_or_default(),
                sale_price: row.sale_price.unwrap_or_default(),
                stock: row.stock.unwrap_or_default(),
                sold: row.sold.unwrap_or_default(),
            })),
            "adjust" => {
                let id = row.id.ok_or_else(|| "adjust missing id".to_string())?;
                let delta = row
                    .delta
                    .ok_or_else(|| format!("adjust missing delta for id {id}"))?;
                Ok(Command::AdjustSold { id, delta })
            }
            "remove" => {
                let id = row.id.ok_or_else(|| "remove missing id".to_string())?;
                Ok(Command::Remove { id })
            }
            "clear" => Ok(Command::Clear),
            other => Err(format!("unknown action: {other}")),
        }
    })
}
