//! Runs the `A1, B2, C1` chain, tracing every step as "Initialising".

use std::io;

use tagchain::TraceStyle;
use tagchain_demo::{init_tracing, run_program, INITIALISE_TAGS};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_program(TraceStyle::Initialising, INITIALISE_TAGS, &mut out)
}
