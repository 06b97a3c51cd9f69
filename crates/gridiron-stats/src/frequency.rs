//! Frequency tables over discrete values
//!
//! Counts how often each distinct value occurs in a dataset. Values are kept
//! in ascending order so rendered tables are reproducible.

use std::collections::BTreeMap;

/// Occurrence counts of discrete values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<K> {
    counts: BTreeMap<K, usize>,
    total: usize,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K> FrequencyTable<K>
where
    K: Ord + Copy,
{
    /// Builds a frequency table from the given values.
    #[must_use]
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut table = Self::default();
        table.extend(values);
        table
    }

    /// Records one occurrence of `value`.
    pub fn push(&mut self, value: K) {
        *self.counts.entry(value).or_default() += 1;
        self.total += 1;
    }

    /// Number of occurrences of `value`.
    #[must_use]
    pub fn count(&self, value: K) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Share of all observations equal to `value`.
    ///
    /// Returns `None` if the table is empty.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn proportion(&self, value: K) -> Option<f64> {
        (self.total > 0).then(|| self.count(value) as f64 / self.total as f64)
    }

    /// Total number of observations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Iterates over `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (K, usize)> + '_ {
        self.counts.iter().map(|(value, count)| (*value, *count))
    }
}

impl<K> Extend<K> for FrequencyTable<K>
where
    K: Ord + Copy,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<K> FromIterator<K> for FrequencyTable<K>
where
    K: Ord + Copy,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::new(iter)
    }
}
