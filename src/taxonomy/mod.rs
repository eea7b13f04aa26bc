//! Reference taxonomy lookups.
//!
//! - `index`: case-insensitive tables keyed by department and (department, group)
//! - `resolver`: best-subgroup pick for a known (department, group)

pub mod index;
pub mod resolver;

pub use index::TaxonomyIndex;
pub use resolver::resolve_subgroup;
