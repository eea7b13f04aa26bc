//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during classification
//! - exported to CSV/JSON
//! - built by hand in tests without any file I/O

use serde::{Deserialize, Serialize};

/// One row of the reference taxonomy (domain → department → group → subgroup).
///
/// Only `domain_name` is required; rows without it never make it this far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub domain_id: Option<String>,
    pub domain_name: String,
    pub dept_id: Option<String>,
    pub dept_name: Option<String>,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
    pub subgroup_id: Option<String>,
    pub subgroup_name: Option<String>,
}

/// One product row as read from the product list.
///
/// Every column may be blank; blank cells are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub item_id: Option<String>,
    pub item_name: Option<String>,
    pub domain: Option<String>,
    pub dept: Option<String>,
    pub group: Option<String>,
    pub subgroup: Option<String>,
    pub supplier_id: Option<String>,
    pub supplier_name: Option<String>,
}

impl Product {
    /// Item name, or `""` when the cell was blank.
    pub fn name(&self) -> &str {
        self.item_name.as_deref().unwrap_or("")
    }
}

/// A full four-level category position.
///
/// Field order matters: the derived `Ord` sorts by domain, then dept, group, subgroup.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryPath {
    pub domain: String,
    pub dept: String,
    pub group: String,
    pub subgroup: String,
}

impl CategoryPath {
    pub fn new(
        domain: impl Into<String>,
        dept: impl Into<String>,
        group: impl Into<String>,
        subgroup: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            dept: dept.into(),
            group: group.into(),
            subgroup: subgroup.into(),
        }
    }

    /// True if `marker` appears in the dept, group or subgroup name.
    ///
    /// The domain tier is never "new": it is one of a handful of fixed top levels.
    pub fn has_marker(&self, marker: &str) -> bool {
        !marker.is_empty()
            && [&self.dept, &self.group, &self.subgroup]
                .iter()
                .any(|part| part.contains(marker))
    }
}

/// Outcome of classifying a single product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Fully classified by a keyword rule onto an existing category.
    AutoFull,
    /// Department and group were known; the subgroup came from the taxonomy.
    AutoSubgroup,
    /// A keyword rule matched, but its target category does not exist yet.
    NewCategory,
    /// Only the department was known; group/subgroup are a guess to be reviewed.
    PartialAuto,
    /// Nothing matched; needs manual review.
    Unknown,
    /// Placeholder item, not a real product.
    Skipped,
}

impl Status {
    /// Reporting order.
    pub const ALL: [Status; 6] = [
        Status::AutoFull,
        Status::AutoSubgroup,
        Status::NewCategory,
        Status::PartialAuto,
        Status::Unknown,
        Status::Skipped,
    ];

    /// Stable machine name (matches the serde representation).
    pub fn key(self) -> &'static str {
        match self {
            Status::AutoFull => "auto_full",
            Status::AutoSubgroup => "auto_subgroup",
            Status::NewCategory => "new_category",
            Status::PartialAuto => "partial_auto",
            Status::Unknown => "unknown",
            Status::Skipped => "skipped",
        }
    }

    /// Row fill colour (RGB hex) used to tag output rows for triage.
    pub fn color_hex(self) -> &'static str {
        match self {
            Status::AutoFull => "C6EFCE",
            Status::AutoSubgroup => "DDEBF7",
            Status::NewCategory => "FFEB9C",
            Status::PartialAuto => "FCE4D6",
            Status::Unknown => "FFCCCC",
            Status::Skipped => "D9D9D9",
        }
    }

    pub fn color_name(self) -> &'static str {
        match self {
            Status::AutoFull => "green",
            Status::AutoSubgroup => "light blue",
            Status::NewCategory => "yellow",
            Status::PartialAuto => "orange",
            Status::Unknown => "red",
            Status::Skipped => "grey",
        }
    }

    /// What the colour asks of the person reviewing the output.
    pub fn legend(self) -> &'static str {
        match self {
            Status::AutoFull => "fully classified automatically (safe)",
            Status::AutoSubgroup => "subgroup filled in automatically",
            Status::NewCategory => "new category required (create it in the system)",
            Status::PartialAuto => "partially classified, review recommended",
            Status::Unknown => "not recognised, manual review required",
            Status::Skipped => "placeholder item, skipped",
        }
    }
}

/// The verdict for one product. Produced once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub product: Product,
    pub domain: Option<String>,
    pub dept: Option<String>,
    pub group: Option<String>,
    pub subgroup: Option<String>,
    pub status: Status,
}

impl ClassificationResult {
    /// The resolved tuple, with absent tiers as empty strings.
    pub fn category(&self) -> CategoryPath {
        CategoryPath::new(
            self.domain.clone().unwrap_or_default(),
            self.dept.clone().unwrap_or_default(),
            self.group.clone().unwrap_or_default(),
            self.subgroup.clone().unwrap_or_default(),
        )
    }
}

/// `Some(trimmed)` when the value is present and not blank.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Lookup key used everywhere a taxonomy name is compared.
pub fn lookup_key(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_marker_ignores_domain() {
        let path = CategoryPath::new("NF *new*", "Garden", "Plants", "Seeds");
        assert!(!path.has_marker("*new*"));

        let path = CategoryPath::new("NF", "Garden", "Plants *new*", "Seeds");
        assert!(path.has_marker("*new*"));
    }

    #[test]
    fn category_paths_sort_by_tier() {
        let mut paths = vec![
            CategoryPath::new("B", "a", "a", "a"),
            CategoryPath::new("A", "z", "a", "a"),
            CategoryPath::new("A", "b", "c", "a"),
            CategoryPath::new("A", "b", "b", "z"),
        ];
        paths.sort();
        let order: Vec<_> = paths.iter().map(|p| (p.domain.as_str(), p.group.as_str())).collect();
        assert_eq!(order, vec![("A", "b"), ("A", "c"), ("A", "a"), ("B", "a")]);
    }

    #[test]
    fn present_treats_blank_as_absent() {
        assert_eq!(present(Some("  Bakery ")), Some("Bakery"));
        assert_eq!(present(Some("   ")), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn status_keys_are_unique() {
        let mut keys: Vec<_> = Status::ALL.iter().map(|s| s.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Status::ALL.len());
    }
}
