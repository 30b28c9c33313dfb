//! Counted multiset of attacking type names

use std::collections::BTreeMap;

/// Multiset keyed by attacking type name.
///
/// Iteration is in ascending name order, which is also the display order of
/// the final result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Tally<'a> {
    counts: BTreeMap<&'a str, u32>,
}

impl<'a> Tally<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &'a str) {
        *self.counts.entry(name).or_insert(0) += 1;
    }

    /// Remove one occurrence of every element of `other`, per occurrence.
    /// Names absent from `self` are ignored.
    pub fn cancel(&mut self, other: &Tally<'_>) {
        for (name, n) in &other.counts {
            if let Some(count) = self.counts.get_mut(*name) {
                *count = count.saturating_sub(*n);
            }
        }
        self.counts.retain(|_, count| *count > 0);
    }

    #[cfg(test)]
    pub fn count(&self, name: &str) -> u32 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.counts.iter().map(|(name, count)| (*name, *count))
    }
}

impl<'a> Extend<&'a str> for Tally<'a> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for name in iter {
            self.add(name);
        }
    }
}
