//! Ordered keyword rules: item-name substrings mapped to a target category.
//!
//! The table is scanned top-down and the first hit wins, so it is kept as a
//! `Vec` and never reordered. Keywords are lower-cased once when the table is
//! built; item names are lower-cased per lookup.

use serde::Serialize;

use crate::domain::CategoryPath;

pub mod builtin;

/// One keyword group and the category it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub keywords: Vec<String>,
    pub category: CategoryPath,
    /// Author commentary carried with the rule (e.g. an acknowledged approximate fit).
    pub note: Option<String>,
}

impl Rule {
    pub fn new<I, S>(keywords: I, category: CategoryPath) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            category,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A successful lookup: which rule fired and on which keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// Zero-based position of the rule in the table.
    pub position: usize,
    pub rule: &'a Rule,
    pub keyword: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Build a table from rules in priority order.
    ///
    /// Keywords are trimmed and lower-cased; blank keywords are dropped.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|mut rule| {
                rule.keywords = rule
                    .keywords
                    .iter()
                    .map(|kw| kw.trim().to_lowercase())
                    .filter(|kw| !kw.is_empty())
                    .collect();
                rule
            })
            .collect();
        Self { rules }
    }

    /// The rule set compiled into the binary.
    pub fn builtin() -> Self {
        let rules = builtin::BUILTIN_RULES
            .iter()
            .map(|b| {
                let [domain, dept, group, subgroup] = b.category;
                let rule = Rule::new(
                    b.keywords.iter().copied(),
                    CategoryPath::new(domain, dept, group, subgroup),
                );
                match b.note {
                    Some(note) => rule.with_note(note),
                    None => rule,
                }
            })
            .collect();
        Self::from_rules(rules)
    }

    /// First rule (in table order) with a keyword contained in `name`.
    pub fn find(&self, name: &str) -> Option<RuleMatch<'_>> {
        let name_lower = name.to_lowercase();
        self.rules.iter().enumerate().find_map(|(position, rule)| {
            rule.keywords
                .iter()
                .find(|kw| name_lower.contains(kw.as_str()))
                .map(|keyword| RuleMatch {
                    position,
                    rule,
                    keyword: keyword.as_str(),
                })
        })
    }

    /// Category of the first matching rule, if any.
    pub fn match_name(&self, name: &str) -> Option<&CategoryPath> {
        self.find(name).map(|m| &m.rule.category)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
