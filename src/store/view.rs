//! Derived views over entity stores
//!
//! Pure filter and aggregate computations. No side effects, deterministic,
//! safe to recompute on every render tick.

use std::collections::BTreeMap;

use super::Record;

// ─────────────────────────────────────────────────────────────────
// Filtering
// ─────────────────────────────────────────────────────────────────

/// A single field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Criterion {
    /// No constraint ("all" in the UI dropdowns).
    #[default]
    Any,
    /// Exact match against the record's text view of the field.
    Equals(String),
}

impl Criterion {
    fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Criterion::Any => true,
            Criterion::Equals(expected) => value == Some(expected.as_str()),
        }
    }
}

/// Field name -> criterion mapping. A record passes when every non-`Any`
/// criterion matches its field exactly.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    criteria: BTreeMap<String, Criterion>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style constraint. `Any` entries are kept but never exclude.
    pub fn with(mut self, field: impl Into<String>, criterion: Criterion) -> Self {
        self.criteria.insert(field.into(), criterion);
        self
    }

    /// Shorthand for an exact-match constraint.
    pub fn equals(self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(field, Criterion::Equals(value.into()))
    }

    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.criteria
            .iter()
            .all(|(field, criterion)| criterion.matches(record.field_text(field).as_deref()))
    }
}

/// Filter records against the criteria, preserving order.
pub fn filter<'a, R: Record>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    records.iter().filter(|r| criteria.matches(*r)).collect()
}

// ─────────────────────────────────────────────────────────────────
// Aggregation
// ─────────────────────────────────────────────────────────────────

/// Per-bucket counts plus total, as shown on the dashboard summary cards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Counts {
    pub by_bucket: BTreeMap<String, usize>,
    pub total: usize,
}

impl Counts {
    /// Count for one bucket; absent buckets count zero.
    pub fn bucket(&self, name: &str) -> usize {
        self.by_bucket.get(name).copied().unwrap_or(0)
    }
}

/// Bucket records by a status-like key. Bucket counts always sum to
/// `records.len()`.
pub fn aggregate<R, F>(records: &[R], bucket_of: F) -> Counts
where
    F: Fn(&R) -> String,
{
    let mut counts = Counts {
        total: records.len(),
        ..Default::default()
    };
    for record in records {
        *counts.by_bucket.entry(bucket_of(record)).or_insert(0) += 1;
    }
    counts
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::tests::Note;

    fn sample() -> Vec<Note> {
        vec![
            Note::new("1", "alpha", "pending"),
            Note::new("2", "beta", "completed"),
            Note::new("3", "gamma", "pending"),
        ]
    }

    #[test]
    fn test_all_any_returns_everything_in_order() {
        let records = sample();
        let criteria = FilterCriteria::new()
            .with("title", Criterion::Any)
            .with("status", Criterion::Any);

        let out = filter(&records, &criteria);
        assert_eq!(out.len(), 3);
        let ids: Vec<&str> = out.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_exact_match_filter() {
        let records = vec![Note::new("1", "alpha", "pending")];

        let pending = FilterCriteria::new().equals("status", "pending");
        assert_eq!(filter(&records, &pending).len(), 1);

        let completed = FilterCriteria::new().equals("status", "completed");
        assert!(filter(&records, &completed).is_empty());
    }

    #[test]
    fn test_criteria_combine_conjunctively() {
        let records = sample();
        let criteria = FilterCriteria::new()
            .equals("status", "pending")
            .equals("title", "gamma");

        let out = filter(&records, &criteria);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");
    }

    #[test]
    fn test_unknown_field_never_matches_equals() {
        let records = sample();
        let criteria = FilterCriteria::new().equals("no_such_field", "x");
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn test_aggregate_sums_to_total() {
        let records = sample();
        let counts = aggregate(&records, |n| n.status.clone());

        assert_eq!(counts.total, 3);
        assert_eq!(counts.bucket("pending"), 2);
        assert_eq!(counts.bucket("completed"), 1);
        assert_eq!(counts.bucket("overdue"), 0);
        assert_eq!(counts.by_bucket.values().sum::<usize>(), counts.total);
    }

    #[test]
    fn test_aggregate_empty() {
        let counts = aggregate::<Note, _>(&[], |n| n.status.clone());
        assert_eq!(counts.total, 0);
        assert!(counts.by_bucket.is_empty());
    }
}
