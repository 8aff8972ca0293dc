use std::io::{self, Write};

use crate::{Accumulator, Variant};

/// Verb used in the trace line printed for every processed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraceStyle {
    /// `Processing <Tag>...`
    #[default]
    Processing,
    /// `Initialising <Tag>...`
    Initialising,
}

impl TraceStyle {
    pub fn verb(self) -> &'static str {
        match self {
            TraceStyle::Processing => "Processing",
            TraceStyle::Initialising => "Initialising",
        }
    }
}

/// Handler run for each resolved variant: prints the trace line, then
/// appends the variant to the accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Processor {
    style: TraceStyle,
}

impl Processor {
    pub fn new(style: TraceStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> TraceStyle {
        self.style
    }

    pub fn process(
        &self,
        variant: &'static dyn Variant,
        accumulator: &mut Accumulator,
        out: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(out, "{} {}...", self.style.verb(), variant.tag())?;
        accumulator.push(variant);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family;

    #[family(name = "B")]
    enum FamilyB {
        B1,
        B2,
    }

    #[test]
    fn processing_trace_line() {
        let mut accumulator = Accumulator::new();
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(Processor::default().style(), TraceStyle::Processing);

        Processor::default()
            .process(&FamilyB::B2, &mut accumulator, &mut out)
            .unwrap();

        assert_eq!(out, b"Processing B2...\n");
        assert_eq!(accumulator.tags().collect::<Vec<_>>(), ["B2"]);
    }

    #[test]
    fn initialising_trace_line() {
        let mut accumulator = Accumulator::new();
        let mut out: Vec<u8> = Vec::new();
        let processor = Processor::new(TraceStyle::Initialising);
        assert_eq!(processor.style(), TraceStyle::Initialising);

        processor
            .process(&FamilyB::B1, &mut accumulator, &mut out)
            .unwrap();
        processor
            .process(&FamilyB::B2, &mut accumulator, &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Initialising B1...\nInitialising B2...\n"
        );
        assert_eq!(accumulator.tags().collect::<Vec<_>>(), ["B1", "B2"]);
    }

    #[test]
    fn failed_write_leaves_accumulator_untouched() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut accumulator = Accumulator::new();
        let err = Processor::default()
            .process(&FamilyB::B1, &mut accumulator, &mut Closed)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(accumulator.is_empty());
    }
}
