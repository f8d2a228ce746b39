use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Diagnostics go to stderr so the report CSV on stdout stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    init_tracing();

    if let Err(err) = inventory_ledger::app::run(std::env::args()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
