//! Month-keyed accumulation.

use std::collections::HashMap;

use crate::config::MonthOrder;
use crate::models::MonthYear;

/// Accumulators keyed by month, remembering first-seen order.
#[derive(Debug, Clone)]
pub struct MonthBuckets<T> {
    buckets: Vec<(MonthYear, T)>,
    index: HashMap<MonthYear, usize>,
}

impl<T> Default for MonthBuckets<T> {
    fn default() -> Self {
        Self {
            buckets: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Default> MonthBuckets<T> {
    /// Returns the accumulator for `month`, creating it on first use.
    pub fn entry(&mut self, month: MonthYear) -> &mut T {
        let i = *self.index.entry(month).or_insert_with(|| {
            self.buckets.push((month, T::default()));
            self.buckets.len() - 1
        });
        &mut self.buckets[i].1
    }
}

impl<T> MonthBuckets<T> {
    /// Consumes the buckets in the requested order.
    pub fn into_ordered(self, order: MonthOrder) -> Vec<(MonthYear, T)> {
        let mut buckets = self.buckets;
        if order == MonthOrder::Chronological {
            buckets.sort_by_key(|(month, _)| *month);
        }
        buckets
    }
}
