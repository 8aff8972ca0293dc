//! The demonstration families and fixed chains run by the `process_chain`
//! and `initialise_chain` binaries.

use std::io::{self, Write};

use tagchain::{chain, family, Accumulator, Chain, ChainError, TraceStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[family(name = "A")]
pub enum FamilyA {
    A1,
    A2,
}

#[family(name = "B")]
pub enum FamilyB {
    B1,
    B2,
}

#[family(name = "C")]
pub enum FamilyC {
    C1,
    C2,
}

/// Tags resolved by `process_chain`.
pub const PROCESS_TAGS: [&str; 3] = ["A1", "B1", "C2"];

/// Tags resolved by `initialise_chain`.
pub const INITIALISE_TAGS: [&str; 3] = ["A1", "B2", "C1"];

/// One step per family, in the order A, B, C.
pub fn demo_chain(style: TraceStyle, [a, b, c]: [&'static str; 3]) -> Chain {
    chain![FamilyA => a, FamilyB => b, FamilyC => c].with_style(style)
}

pub fn run_demo(
    style: TraceStyle,
    tags: [&'static str; 3],
    out: &mut dyn Write,
) -> Result<Accumulator, ChainError> {
    demo_chain(style, tags).run(out)
}

/// Body shared by both binaries: run the chain into `out` and flush it.
///
/// An unresolved tag comes back as an error, which `main` returns so the
/// process exits with a non-zero status.
pub fn run_program(
    style: TraceStyle,
    tags: [&'static str; 3],
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    tracing::debug!(?style, tags = ?tags, "tagchain_demo.start");
    run_demo(style, tags, out)?;
    out.flush()?;
    Ok(())
}

/// Install the stderr subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}
