use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use crate::resolve::resolve_variant;
use crate::{
    Accumulator, ChainError, Family, PrintTags, Processor, Sink, TraceStyle, UnresolvedTag,
    Variant,
};

type ResolveFn = fn(&str) -> Result<&'static dyn Variant, UnresolvedTag>;

/// One `(family, tag)` resolution request.
#[derive(Clone)]
pub struct Step {
    family: &'static str,
    tag: Cow<'static, str>,
    resolve: ResolveFn,
}

impl Step {
    pub fn new<F: Family>(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            family: F::NAME,
            tag: tag.into(),
            resolve: resolve_variant::<F>,
        }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn resolve(&self) -> Result<&'static dyn Variant, UnresolvedTag> {
        (self.resolve)(&self.tag)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("family", &self.family)
            .field("tag", &self.tag)
            .finish()
    }
}

/// A fixed sequence of steps, each resolved into one shared [`Accumulator`].
///
/// Steps run strictly in order on the calling thread. The first tag that
/// fails to resolve stops the chain; nothing is printed for that step or
/// any later one, and the sink never runs.
#[derive(Debug, Clone, Default)]
pub struct Chain {
    steps: Vec<Step>,
    style: TraceStyle,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: TraceStyle) -> Self {
        self.style = style;
        self
    }

    /// Append a step resolving `tag` within family `F`.
    pub fn step<F: Family>(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.push(Step::new::<F>(tag));
        self
    }

    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn style(&self) -> TraceStyle {
        self.style
    }

    /// Resolve and process every step, returning the accumulated variants
    /// without running a sink.
    pub fn resolve_all(&self, out: &mut dyn Write) -> Result<Accumulator, ChainError> {
        let processor = Processor::new(self.style);
        let mut accumulator = Accumulator::new();

        for (index, step) in self.steps.iter().enumerate() {
            let _span = tracing::debug_span!(
                "tagchain.step",
                index,
                family = step.family,
                tag = %step.tag
            )
            .entered();

            let variant = step.resolve()?;
            processor.process(variant, &mut accumulator, out)?;
        }

        Ok(accumulator)
    }

    /// Run the chain into the default [`PrintTags`] sink.
    pub fn run(&self, out: &mut dyn Write) -> Result<Accumulator, ChainError> {
        self.run_with(&mut PrintTags, out)
    }

    pub fn run_with<S>(&self, sink: &mut S, out: &mut dyn Write) -> Result<Accumulator, ChainError>
    where
        S: Sink + ?Sized,
    {
        let accumulator = self.resolve_all(out)?;
        sink.finish(&accumulator, out)?;
        Ok(accumulator)
    }
}
