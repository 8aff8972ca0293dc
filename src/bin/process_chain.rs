//! Runs the `A1, B1, C2` chain, tracing every step as "Processing".

use std::io;

use tagchain::TraceStyle;
use tagchain_demo::{init_tracing, run_program, PROCESS_TAGS};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_program(TraceStyle::Processing, PROCESS_TAGS, &mut out)
}
