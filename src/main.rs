mod chat;
mod extract;
mod format;
mod models;
mod receipt;
mod run;
mod ui;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => run::as_tui(),
        2.. => run::as_cli(&args),
        _ => {
            eprintln!("Usage: budgetbot [command]");
            Ok(())
        }
    }
}

// Logs go to stderr and stay silent unless RUST_LOG enables them, so
// the alternate screen is not disturbed at default levels.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
