//! Per-item decision cascade.
//!
//! Steps, first success wins:
//! 1. placeholder skip
//! 2. subgroup from the taxonomy (dept + group known)
//! 3. keyword rule
//! 4. department-only guess (dept known, group missing)
//! 5. unknown
//!
//! Each product is classified independently against read-only lookups, so
//! `classify_all` fans out across the rayon pool.

use rayon::prelude::*;
use tracing::trace;

use crate::config::Vocabulary;
use crate::domain::{ClassificationResult, Product, Status, present};
use crate::rules::{RuleMatch, RuleTable};
use crate::taxonomy::{TaxonomyIndex, resolve_subgroup};

/// Which cascade step produced a verdict (used by `shelf explain`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Skip,
    TaxonomySubgroup,
    KeywordRule { position: usize },
    DepartmentFallback,
    Unknown,
}

/// A verdict together with how it was reached.
#[derive(Debug, Clone)]
pub struct Trace<'r> {
    pub result: ClassificationResult,
    pub step: Step,
    pub rule: Option<RuleMatch<'r>>,
}

#[derive(Debug, Clone, Copy)]
pub struct ClassificationEngine<'a> {
    index: &'a TaxonomyIndex,
    rules: &'a RuleTable,
    vocabulary: &'a Vocabulary,
}

impl<'a> ClassificationEngine<'a> {
    pub fn new(index: &'a TaxonomyIndex, rules: &'a RuleTable, vocabulary: &'a Vocabulary) -> Self {
        Self {
            index,
            rules,
            vocabulary,
        }
    }

    pub fn classify(&self, product: &Product) -> ClassificationResult {
        self.trace(product).result
    }

    /// Classify every product, preserving input order.
    pub fn classify_all(&self, products: &[Product]) -> Vec<ClassificationResult> {
        products.par_iter().map(|p| self.classify(p)).collect()
    }

    /// Classify one product and report which step decided it.
    pub fn trace(&self, product: &Product) -> Trace<'a> {
        let trace = self.decide(product);
        trace!(
            item_id = product.item_id.as_deref().unwrap_or(""),
            step = ?trace.step,
            status = trace.result.status.key(),
            "classified"
        );
        trace
    }

    fn decide(&self, product: &Product) -> Trace<'a> {
        let vocab = self.vocabulary;
        let name = product.name();
        let domain = present(product.domain.as_deref());
        let dept = present(product.dept.as_deref());
        let group = present(product.group.as_deref());

        if name.contains(vocab.skip_marker.as_str()) {
            return Trace {
                result: build(
                    product,
                    Status::Skipped,
                    [
                        domain.map(str::to_string),
                        dept.map(str::to_string),
                        group.map(str::to_string),
                        Some(vocab.skipped_subgroup.clone()),
                    ],
                ),
                step: Step::Skip,
                rule: None,
            };
        }

        if let (Some(d), Some(g)) = (dept, group) {
            if let Some(subgroup) = resolve_subgroup(d, g, name, self.index) {
                return Trace {
                    result: build(
                        product,
                        Status::AutoSubgroup,
                        [
                            domain.map(str::to_string),
                            dept.map(str::to_string),
                            group.map(str::to_string),
                            Some(subgroup),
                        ],
                    ),
                    step: Step::TaxonomySubgroup,
                    rule: None,
                };
            }
        }

        if let Some(hit) = self.rules.find(name) {
            let category = &hit.rule.category;
            let status = if category.has_marker(&vocab.new_category_marker) {
                Status::NewCategory
            } else {
                Status::AutoFull
            };
            return Trace {
                result: build(
                    product,
                    status,
                    [
                        Some(category.domain.clone()),
                        Some(category.dept.clone()),
                        Some(category.group.clone()),
                        Some(category.subgroup.clone()),
                    ],
                ),
                step: Step::KeywordRule {
                    position: hit.position,
                },
                rule: Some(hit),
            };
        }

        if let (Some(d), None) = (dept, group) {
            let guess = self
                .index
                .by_dept(d)
                .iter()
                .find_map(|e| present(e.subgroup_name.as_deref()).map(|sub| (e, sub)));
            if let Some((entry, subgroup)) = guess {
                return Trace {
                    result: build(
                        product,
                        Status::PartialAuto,
                        [
                            Some(domain.unwrap_or(entry.domain_name.as_str()).to_string()),
                            dept.map(str::to_string),
                            entry.group_name.clone(),
                            Some(format!("{subgroup} {}", vocab.review_suffix)),
                        ],
                    ),
                    step: Step::DepartmentFallback,
                    rule: None,
                };
            }
        }

        Trace {
            result: build(
                product,
                Status::Unknown,
                [
                    Some(domain.unwrap_or(vocab.unknown_domain.as_str()).to_string()),
                    Some(dept.unwrap_or(vocab.needs_review.as_str()).to_string()),
                    Some(group.unwrap_or(vocab.needs_review.as_str()).to_string()),
                    Some(vocab.manual_review.clone()),
                ],
            ),
            step: Step::Unknown,
            rule: None,
        }
    }
}

fn build(
    product: &Product,
    status: Status,
    [domain, dept, group, subgroup]: [Option<String>; 4],
) -> ClassificationResult {
    ClassificationResult {
        product: product.clone(),
        domain,
        dept,
        group,
        subgroup,
        status,
    }
}
