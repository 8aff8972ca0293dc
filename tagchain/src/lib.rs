//! Resolve textual tags against closed families of marker variants, and run
//! the resolved variants through a fixed chain of steps.
//!
//! ```
//! use tagchain::{chain, family, TraceStyle};
//!
//! #[family]
//! pub enum Shape {
//!     Circle,
//!     Square,
//! }
//!
//! #[family]
//! pub enum Colour {
//!     Red,
//!     Green,
//! }
//!
//! let mut out: Vec<u8> = Vec::new();
//! let accumulated = chain![Shape => "Square", Colour => "Red"]
//!     .with_style(TraceStyle::Processing)
//!     .run(&mut out)
//!     .unwrap();
//!
//! assert_eq!(accumulated.tags().collect::<Vec<_>>(), ["Square", "Red"]);
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "Processing Square...\nProcessing Red...\nSquare\nRed\nProgram completed successfully\n"
//! );
//! ```

// Lets `#[family]` expansions refer to `::tagchain` from inside this crate.
extern crate self as tagchain;

mod accumulator;
mod chain;
mod error;
mod processor;
mod resolve;
mod sink;

use core::fmt;

pub use tagchain_macros::family;

pub use accumulator::Accumulator;
pub use chain::{Chain, Step};
pub use error::{ChainError, UnresolvedTag};
pub use processor::{Processor, TraceStyle};
pub use resolve::{resolve, resolve_variant};
pub use sink::{PrintTags, Sink, COMPLETION_MESSAGE};

/// A zero-data marker value, identified by its tag alone.
pub trait Variant: fmt::Debug + 'static {
    /// The tag naming this variant within its family.
    fn tag(&self) -> &'static str;

    /// Name of the family this variant belongs to.
    fn family(&self) -> &'static str;
}

/// A closed, ordered set of variants sharing one tag namespace.
///
/// Implemented by `#[family]`; candidates appear in declaration order.
pub trait Family: Variant + Sized {
    const NAME: &'static str;
    const CANDIDATES: &'static [Self];
}

impl<'a> PartialEq for dyn Variant + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.tag() == other.tag()
    }
}

impl<'a> Eq for dyn Variant + 'a {}

impl<'a> fmt::Display for dyn Variant + 'a {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Build a [`Chain`] from `Family => "tag"` pairs, resolved in the order given.
///
/// ```
/// use tagchain::{chain, family};
///
/// #[family]
/// pub enum Side {
///     Left,
///     Right,
/// }
///
/// let chain = chain![Side => "Left", Side => "Right"];
/// assert_eq!(chain.steps().len(), 2);
/// ```
#[macro_export]
macro_rules! chain {
    ($($family:ty => $tag:expr),* $(,)?) => {
        $crate::Chain::new()$(.step::<$family>($tag))*
    };
}
