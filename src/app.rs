use std::io::{BufWriter, Write, stdout};

use tracing::{info, warn};

use crate::{
    common::{command::Command, error::AppError},
    domain::{ledger::Ledger, metrics},
    io::{reader, writer},
    store::JsonFileStore,
};

const DEFAULT_STORE_PATH: &str = "inventory.json";

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];
    let store_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_STORE_PATH);

    let store = JsonFileStore::new(store_path);
    let mut ledger = Ledger::new();
    if let Some(snapshot) = store.load() {
        match ledger.restore(snapshot) {
            Ok(()) => info!(products = ledger.products().len(), "restored ledger"),
            Err(err) => warn!(%err, "discarding unusable snapshot"),
        }
    }

    let file = std::fs::File::open(input_path)?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut processor = crate::worker::processor::Processor::new();
    for command in reader::read_commands(&mut csv_reader) {
        let command = command.map_err(AppError::Parse)?;
        let was_clear = matches!(command, Command::Clear);

        match processor.process(&mut ledger, command) {
            Ok(()) => {
                // Clearing removes the stored document instead of writing
                // an empty one.
                let persisted = if was_clear {
                    store.clear()
                } else {
                    store.save(&ledger.snapshot())
                };
                if let Err(err) = persisted {
                    // In-memory state stays authoritative.
                    warn!(%err, "failed to persist ledger state");
                }
            }
            // Rejections surface to the user; the run continues.
            Err(err) => eprintln!("rejected: {err}"),
        }
    }

    // After processing all commands, write the product table and the
    // aggregate summary to stdout.
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());
    writer::write_products(&mut out, ledger.products())?;
    writeln!(&mut out)?;
    writer::write_summary(&mut out, &metrics::aggregate(ledger.products()))?;
    out.flush()?;

    Ok(())
}
