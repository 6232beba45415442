// ============================================================================
// Karatsuba CLI
// Reads "<a> <b>" from stdin, prints a * b
// ============================================================================

use karatsuba::prelude::*;
use karatsuba::utils::read_operands;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Aborting");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (a, b) = read_operands(&mut io::stdin().lock())?;

    let multiplier = create_from_config(MultiplierConfig::default(), Arc::new(LoggingEventHandler))?;
    let product = multiplier.multiply(&a, &b)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", product)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(feature = "logging")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging() {}
