//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the classification code stays free of printing
//! - output changes are localized (and testable as plain strings)

use crate::classify::{Step, Summary, Trace};
use crate::config::{Labels, Vocabulary};
use crate::domain::{CategoryPath, Status};
use crate::rules::RuleTable;

const LABEL_WIDTH: usize = 30;

/// Per-status counts with percentages, then the total.
pub fn format_summary(summary: &Summary, labels: &Labels) -> String {
    let mut out = String::new();
    out.push_str("── Classification Summary ──────────────────────────────────\n");
    for status in Status::ALL {
        out.push_str(&format!(
            "  {:<LABEL_WIDTH$} {:>5}  ({:.1}%)\n",
            labels.status(status),
            summary.count(status),
            summary.percent(status)
        ));
    }
    out.push_str(&format!("  {:<LABEL_WIDTH$} {:>5}\n", labels.total, summary.total));
    out
}

/// The sorted list of categories that must be created. Empty when there are none.
pub fn format_new_categories(summary: &Summary, vocabulary: &Vocabulary) -> String {
    if summary.new_categories.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str("── New Categories to Create in System ──────────────────────\n");
    out.push_str(&format!(
        "  (marked with {} in the output file)\n",
        vocabulary.new_category_marker
    ));
    for category in &summary.new_categories {
        out.push_str(&format!("  {}\n", fmt_category(category)));
    }
    out
}

/// Status colour legend for reading the output file.
pub fn format_legend(labels: &Labels) -> String {
    let mut out = String::new();
    out.push_str("── Color Legend ────────────────────────────────────────────\n");
    for status in Status::ALL {
        out.push_str(&format!(
            "  {:<10} #{}  {:<LABEL_WIDTH$} {}\n",
            status.color_name(),
            status.color_hex(),
            labels.status(status),
            status.legend()
        ));
    }
    out
}

/// The effective rule table, in evaluation order.
pub fn format_rules(rules: &RuleTable, vocabulary: &Vocabulary) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} rules (evaluated top-down, first match wins)\n", rules.len()));
    for (idx, rule) in rules.rules().iter().enumerate() {
        let flag = if rule.category.has_marker(&vocabulary.new_category_marker) {
            " [new]"
        } else {
            ""
        };
        out.push_str(&format!("{:>3}. {}{flag}\n", idx + 1, fmt_category(&rule.category)));
        out.push_str(&format!("     keywords: {}\n", rule.keywords.join(", ")));
        if let Some(note) = &rule.note {
            out.push_str(&format!("     note: {note}\n"));
        }
    }
    out
}

/// One ad-hoc verdict and how it was reached.
pub fn format_trace(trace: &Trace<'_>, labels: &Labels) -> String {
    let r = &trace.result;
    let mut out = String::new();
    out.push_str(&format!("status   : {} ({})\n", labels.status(r.status), r.status.key()));
    out.push_str(&format!("category : {}\n", fmt_category(&r.category())));

    let how = match trace.step {
        Step::Skip => "placeholder item (skip marker in name)".to_string(),
        Step::TaxonomySubgroup => "subgroup resolved from the taxonomy".to_string(),
        Step::KeywordRule { position } => match &trace.rule {
            Some(hit) => format!("rule #{} matched keyword '{}'", position + 1, hit.keyword),
            None => format!("rule #{}", position + 1),
        },
        Step::DepartmentFallback => "first subgroup under the department (review)".to_string(),
        Step::Unknown => "no match".to_string(),
    };
    out.push_str(&format!("via      : {how}\n"));
    if let Some(note) = trace.rule.as_ref().and_then(|hit| hit.rule.note.as_deref()) {
        out.push_str(&format!("note     : {note}\n"));
    }
    out
}

fn fmt_category(c: &CategoryPath) -> String {
    format!(
        "domain: {} | dept: {} | group: {} | subgroup: {}",
        c.domain, c.dept, c.group, c.subgroup
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{ResultAggregator, summarize};
    use crate::domain::{ClassificationResult, Product};
    use crate::rules::Rule;

    fn new_category(sub: &str) -> ClassificationResult {
        ClassificationResult {
            product: Product::default(),
            domain: Some("NF".to_string()),
            dept: Some("Garden *new*".to_string()),
            group: Some("Plants *new*".to_string()),
            subgroup: Some(sub.to_string()),
            status: Status::NewCategory,
        }
    }

    #[test]
    fn summary_lists_every_status_and_total() {
        let labels = Labels::default();
        let summary = summarize(&[new_category("Seeds"), new_category("Bulbs")]);
        let text = format_summary(&summary, &labels);

        for status in Status::ALL {
            assert!(text.contains(labels.status(status)));
        }
        assert!(text.contains("(100.0%)"));
        assert!(text.lines().last().unwrap().contains(&labels.total));
        assert!(text.lines().last().unwrap().trim_end().ends_with('2'));
    }

    #[test]
    fn new_categories_section_is_sorted_and_omitted_when_empty() {
        let vocab = Vocabulary::default();
        let empty = ResultAggregator::new().summarize();
        assert!(format_new_categories(&empty, &vocab).is_empty());

        let summary = summarize(&[new_category("Seeds"), new_category("Bulbs"), new_category("Seeds")]);
        let text = format_new_categories(&summary, &vocab);
        let bulbs = text.find("subgroup: Bulbs").unwrap();
        let seeds = text.find("subgroup: Seeds").unwrap();
        assert!(bulbs < seeds);
        assert_eq!(text.matches("subgroup: Seeds").count(), 1);
    }

    #[test]
    fn legend_has_one_line_per_status() {
        let text = format_legend(&Labels::default());
        assert_eq!(text.lines().count(), 1 + Status::ALL.len());
        assert!(text.contains("#FFCCCC"));
    }

    #[test]
    fn rules_listing_flags_new_targets_and_notes() {
        let vocab = Vocabulary {
            new_category_marker: "*new*".to_string(),
            ..Vocabulary::default()
        };
        let table = RuleTable::from_rules(vec![
            Rule::new(["seed"], CategoryPath::new("NF", "Garden *new*", "Plants", "Seeds")),
            Rule::new(["matzah"], CategoryPath::new("NF", "Holidays", "General", "Bags"))
                .with_note("best fit available"),
        ]);
        let text = format_rules(&table, &vocab);
        assert!(text.starts_with("2 rules"));
        assert!(text.contains("  1. domain: NF | dept: Garden *new*"));
        assert!(text.lines().nth(1).unwrap().ends_with("[new]"));
        assert!(text.contains("note: best fit available"));
    }
}
