//! Run-level tallies: per-status counts and the set of categories to create.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::domain::{CategoryPath, ClassificationResult, Status};

#[derive(Debug, Clone)]
pub struct ResultAggregator {
    counts: BTreeMap<Status, usize>,
    new_categories: BTreeSet<CategoryPath>,
}

impl Default for ResultAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self {
            counts: Status::ALL.iter().map(|&s| (s, 0)).collect(),
            new_categories: BTreeSet::new(),
        }
    }

    pub fn accumulate(&mut self, result: &ClassificationResult) {
        *self.counts.entry(result.status).or_insert(0) += 1;
        if result.status == Status::NewCategory {
            self.new_categories.insert(result.category());
        }
    }

    pub fn summarize(&self) -> Summary {
        Summary {
            counts: self.counts.clone(),
            total: self.counts.values().sum(),
            new_categories: self.new_categories.iter().cloned().collect(),
        }
    }
}

impl<'r> Extend<&'r ClassificationResult> for ResultAggregator {
    fn extend<I: IntoIterator<Item = &'r ClassificationResult>>(&mut self, iter: I) {
        for result in iter {
            self.accumulate(result);
        }
    }
}

/// Aggregated outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// One entry per status, zero included.
    pub counts: BTreeMap<Status, usize>,
    pub total: usize,
    /// Unique categories to create, sorted by (domain, dept, group, subgroup).
    pub new_categories: Vec<CategoryPath>,
}

impl Summary {
    pub fn count(&self, status: Status) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    /// Share of the total in percent (0 for an empty run).
    pub fn percent(&self, status: Status) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(status) as f64 * 100.0 / self.total as f64
    }
}

/// Fold a result list into a summary.
pub fn summarize(results: &[ClassificationResult]) -> Summary {
    let mut aggregator = ResultAggregator::new();
    aggregator.extend(results);
    aggregator.summarize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Product;

    fn result(status: Status, path: [&str; 4]) -> ClassificationResult {
        let [domain, dept, group, subgroup] = path.map(|s| Some(s.to_string()));
        ClassificationResult {
            product: Product::default(),
            domain,
            dept,
            group,
            subgroup,
            status,
        }
    }

    #[test]
    fn all_statuses_start_at_zero() {
        let summary = ResultAggregator::new().summarize();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.counts.len(), Status::ALL.len());
        for status in Status::ALL {
            assert_eq!(summary.count(status), 0);
            assert_eq!(summary.percent(status), 0.0);
        }
    }

    #[test]
    fn duplicate_new_categories_collapse() {
        let judaica = ["NF", "Judaica *new*", "Prayer *new*", "Tallit *new*"];
        let summary = summarize(&[
            result(Status::NewCategory, judaica),
            result(Status::NewCategory, judaica),
        ]);
        assert_eq!(summary.count(Status::NewCategory), 2);
        assert_eq!(summary.new_categories.len(), 1);
    }

    #[test]
    fn only_new_category_results_enter_the_set() {
        let summary = summarize(&[
            result(Status::AutoFull, ["Food", "Produce", "Fruit", "Apples"]),
            result(Status::PartialAuto, ["Food", "Bakery", "Loaves", "Bread *new*"]),
        ]);
        assert!(summary.new_categories.is_empty());
    }

    #[test]
    fn new_categories_are_sorted_by_tier() {
        let summary = summarize(&[
            result(Status::NewCategory, ["NF", "Garden *new*", "Plants *new*", "Seeds *new*"]),
            result(Status::NewCategory, ["Fresh", "Nuts", "Pecan *new*", "Pecan *new*"]),
            result(Status::NewCategory, ["Fresh", "Nuts", "Almonds *new*", "Almonds *new*"]),
        ]);
        let groups: Vec<_> = summary.new_categories.iter().map(|c| c.group.as_str()).collect();
        assert_eq!(groups, vec!["Almonds *new*", "Pecan *new*", "Plants *new*"]);
    }

    #[test]
    fn percentages_are_shares_of_total() {
        let summary = summarize(&[
            result(Status::Unknown, ["a", "b", "c", "d"]),
            result(Status::Unknown, ["a", "b", "c", "d"]),
            result(Status::AutoFull, ["a", "b", "c", "d"]),
            result(Status::Skipped, ["a", "b", "c", "d"]),
        ]);
        assert_eq!(summary.total, 4);
        assert!((summary.percent(Status::Unknown) - 50.0).abs() < 1e-9);
        assert!((summary.percent(Status::Skipped) - 25.0).abs() < 1e-9);
    }
}
