//! Case-insensitive lookup tables over the reference taxonomy.

use std::collections::HashMap;

use crate::domain::{TaxonomyEntry, lookup_key, present};

/// Lookup tables built once from the taxonomy and shared read-only afterwards.
///
/// Both tables keep entries in taxonomy order: the subgroup fallbacks pick the
/// *first* candidate, so insertion order is part of the contract.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyIndex {
    by_dept_group: HashMap<(String, String), Vec<TaxonomyEntry>>,
    by_dept: HashMap<String, Vec<TaxonomyEntry>>,
    entry_count: usize,
}

impl TaxonomyIndex {
    pub fn build(entries: &[TaxonomyEntry]) -> Self {
        let mut by_dept_group: HashMap<(String, String), Vec<TaxonomyEntry>> = HashMap::new();
        let mut by_dept: HashMap<String, Vec<TaxonomyEntry>> = HashMap::new();

        for entry in entries {
            let dept = present(entry.dept_name.as_deref());
            let group = present(entry.group_name.as_deref());
            let subgroup = present(entry.subgroup_name.as_deref());

            if let (Some(dept), Some(group), Some(_)) = (dept, group, subgroup) {
                by_dept_group
                    .entry((lookup_key(dept), lookup_key(group)))
                    .or_default()
                    .push(entry.clone());
            }
            if let Some(dept) = dept {
                by_dept.entry(lookup_key(dept)).or_default().push(entry.clone());
            }
        }

        Self {
            by_dept_group,
            by_dept,
            entry_count: entries.len(),
        }
    }

    /// Subgroup-bearing entries under `(dept, group)`, in taxonomy order.
    pub fn by_dept_group(&self, dept: &str, group: &str) -> &[TaxonomyEntry] {
        self.by_dept_group
            .get(&(lookup_key(dept), lookup_key(group)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every entry under `dept`, in taxonomy order (subgroup may be blank).
    pub fn by_dept(&self, dept: &str) -> &[TaxonomyEntry] {
        self.by_dept
            .get(&lookup_key(dept))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of entries the index was built from.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn dept_group_count(&self) -> usize {
        self.by_dept_group.len()
    }

    pub fn dept_count(&self) -> usize {
        self.by_dept.len()
    }
}
