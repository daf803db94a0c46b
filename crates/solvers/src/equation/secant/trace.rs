use std::slice;

use super::Record;

/// The ordered record of every step taken by one solve.
///
/// A trace also keeps the seed pair, so [`Trace::iterates`] yields the full
/// sequence `x0, x1, x2, ...` that a convergence plot needs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace {
    seeds: [f64; 2],
    records: Vec<Record>,
}

impl Trace {
    pub(super) fn new(seeds: [f64; 2]) -> Self {
        Self {
            seeds,
            records: Vec::new(),
        }
    }

    pub(super) fn push(&mut self, record: Record) {
        debug_assert!(
            self.records.last().is_none_or(|last| last.is_followed_by(&record)),
            "record {} does not continue the window",
            record.iter,
        );
        self.records.push(record);
    }

    /// Returns the seed pair `[x0, x1]` the solve started from.
    #[must_use]
    pub fn seeds(&self) -> [f64; 2] {
        self.seeds
    }

    /// Returns the records in step order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the number of completed steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no step completed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Iterates over the records in step order.
    pub fn iter(&self) -> slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Iterates over every iterate: both seeds, then each step's `x_next`.
    pub fn iterates(&self) -> impl Iterator<Item = f64> + '_ {
        self.seeds
            .into_iter()
            .chain(self.records.iter().map(|record| record.x_next))
    }

    /// Iterates over each step's displacement `|x_next - x_curr|`.
    pub fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.error)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Record;
    type IntoIter = slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn record(iter: usize, x_prev: f64, x_curr: f64, x_next: f64) -> Record {
        Record {
            iter,
            x_prev,
            x_curr,
            x_next,
            f_next: 0.0,
            error: (x_next - x_curr).abs(),
        }
    }

    #[test]
    fn empty_trace_has_only_seeds() {
        let trace = Trace::new([1.0, 2.0]);
        assert!(trace.is_empty());
        assert!(trace.last().is_none());
        assert_eq!(trace.iterates().collect::<Vec<_>>(), vec![1.0, 2.0]);
        assert_eq!(trace.errors().count(), 0);
    }

    #[test]
    fn iterates_follow_the_window() {
        let mut trace = Trace::new([1.0, 2.0]);
        trace.push(record(1, 1.0, 2.0, 1.5));
        trace.push(record(2, 2.0, 1.5, 1.75));

        assert_eq!(trace.len(), 2);
        assert_eq!(
            trace.iterates().collect::<Vec<_>>(),
            vec![1.0, 2.0, 1.5, 1.75]
        );

        let errors: Vec<_> = trace.errors().collect();
        assert_relative_eq!(errors[0], 0.5);
        assert_relative_eq!(errors[1], 0.25);

        let iters: Vec<_> = (&trace).into_iter().map(|r| r.iter).collect();
        assert_eq!(iters, vec![1, 2]);
    }

    #[test]
    fn window_continuation() {
        let first = record(1, 1.0, 2.0, 1.5);
        assert!(first.is_followed_by(&record(2, 2.0, 1.5, 1.75)));
        assert!(!first.is_followed_by(&record(3, 2.0, 1.5, 1.75)));
        assert!(!first.is_followed_by(&record(2, 1.0, 1.5, 1.75)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "does not continue the window")]
    fn push_rejects_broken_window_in_debug() {
        let mut trace = Trace::new([1.0, 2.0]);
        trace.push(record(1, 1.0, 2.0, 1.5));
        trace.push(record(2, 9.0, 9.0, 9.0));
    }
}
