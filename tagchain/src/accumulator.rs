use core::slice;

use crate::Variant;

/// Ordered, append-only list of the variants resolved so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    resolved: Vec<&'static dyn Variant>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, variant: &'static dyn Variant) {
        self.resolved.push(variant);
    }

    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }

    pub fn as_slice(&self) -> &[&'static dyn Variant] {
        &self.resolved
    }

    pub fn iter(&self) -> slice::Iter<'_, &'static dyn Variant> {
        self.resolved.iter()
    }

    /// Tags of the accumulated variants, in resolution order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.resolved.iter().map(|variant| variant.tag())
    }
}

impl<'a> IntoIterator for &'a Accumulator {
    type Item = &'a &'static dyn Variant;
    type IntoIter = slice::Iter<'a, &'static dyn Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::family;

    #[family]
    enum Pair {
        First,
        Second,
    }

    #[test]
    fn keeps_push_order() {
        let mut accumulator = Accumulator::new();
        assert!(accumulator.is_empty());

        accumulator.push(&Pair::Second);
        accumulator.push(&Pair::First);
        accumulator.push(&Pair::Second);

        assert_eq!(accumulator.len(), 3);
        assert!(accumulator.as_slice()[1] == &Pair::First as &dyn Variant);
        assert_eq!(
            accumulator.tags().collect::<Vec<_>>(),
            ["Second", "First", "Second"]
        );
    }

    #[test]
    fn equality_follows_tags() {
        let mut left = Accumulator::new();
        left.push(&Pair::First);
        let mut right = Accumulator::new();
        right.push(&Pair::First);

        assert_eq!(left, right);
        right.push(&Pair::Second);
        assert_ne!(left, right);
    }
}
