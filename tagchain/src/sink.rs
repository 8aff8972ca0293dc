use std::io::{self, Write};

use crate::Accumulator;

/// Last line printed once every step of a chain has resolved.
pub const COMPLETION_MESSAGE: &str = "Program completed successfully";

/// Terminal step of a chain, handed the fully accumulated variants.
pub trait Sink {
    fn finish(&mut self, accumulated: &Accumulator, out: &mut dyn Write) -> io::Result<()>;
}

/// Prints every accumulated tag on its own line, then [`COMPLETION_MESSAGE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintTags;

impl Sink for PrintTags {
    fn finish(&mut self, accumulated: &Accumulator, out: &mut dyn Write) -> io::Result<()> {
        for tag in accumulated.tags() {
            writeln!(out, "{}", tag)?;
        }
        writeln!(out, "{}", COMPLETION_MESSAGE)?;

        tracing::info!(resolved = accumulated.len(), "tagchain.sink.completed");
        Ok(())
    }
}
