//! Run settings: sentinel vocabulary, status labels and the rule table.
//!
//! Settings come from an optional TOML file selected via:
//! 1. `--config <path>` on the command line
//! 2. `SHELF_CONFIG` environment variable (a `.env` file is honoured)
//! 3. Built-in defaults
//!
//! Every section and field is optional; anything left out keeps its default.
//! A `[[rules]]` array, if present, replaces the built-in rule table entirely.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{CategoryPath, Status};
use crate::error::AppError;
use crate::rules::{Rule, RuleTable};

pub const CONFIG_ENV_VAR: &str = "SHELF_CONFIG";

/// Number of columns in the classified output file.
pub const OUTPUT_COLUMNS: usize = 9;

/// Placeholder strings the engine reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    /// Item names containing this are placeholders, not real products.
    pub skip_marker: String,
    /// Subgroup written for skipped placeholders.
    pub skipped_subgroup: String,
    /// Marks a rule category tier that must still be created in the taxonomy.
    pub new_category_marker: String,
    /// Appended (after a space) to guessed subgroups from the department-only fallback.
    pub review_suffix: String,
    /// Domain written when the product has none and nothing matched.
    pub unknown_domain: String,
    /// Dept/group written when the product has none and nothing matched.
    pub needs_review: String,
    /// Subgroup written when nothing matched.
    pub manual_review: String,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            skip_marker: "פריט חדש".to_string(),
            skipped_subgroup: "פריט לא קיים - לדילוג".to_string(),
            new_category_marker: "*חדש*".to_string(),
            review_suffix: "*לבדיקה*".to_string(),
            unknown_domain: "לא ידוע".to_string(),
            needs_review: "לבדיקה".to_string(),
            manual_review: "לבדיקה ידנית".to_string(),
        }
    }
}

/// Human-readable labels used in the output file and console report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub auto_full: String,
    pub auto_subgroup: String,
    pub new_category: String,
    pub partial_auto: String,
    pub unknown: String,
    pub skipped: String,
    pub total: String,
    /// Output file header row.
    pub headers: Vec<String>,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            auto_full: "סווג אוטומטי".to_string(),
            auto_subgroup: "קבוצת משנה אוטומטית".to_string(),
            new_category: "קטגוריה חדשה נדרשת".to_string(),
            partial_auto: "לבדיקה - חלקי".to_string(),
            unknown: "לבדיקה ידנית".to_string(),
            skipped: "פריט לא קיים".to_string(),
            total: "סה\"כ".to_string(),
            headers: [
                "פריט",
                "שם פריט",
                "תאור מחלקת על",
                "שם מחלקה",
                "שם קבוצה",
                "שם קבוצת משנה",
                "ספק",
                "שם ספק",
                "סטטוס",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl Labels {
    pub fn status(&self, status: Status) -> &str {
        match status {
            Status::AutoFull => &self.auto_full,
            Status::AutoSubgroup => &self.auto_subgroup,
            Status::NewCategory => &self.new_category,
            Status::PartialAuto => &self.partial_auto,
            Status::Unknown => &self.unknown,
            Status::Skipped => &self.skipped,
        }
    }
}

/// A rule as written in the TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct RuleDef {
    pub keywords: Vec<String>,
    /// `[domain, dept, group, subgroup]`
    pub category: [String; 4],
    #[serde(default)]
    pub note: Option<String>,
}

/// Raw TOML file layout.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub vocabulary: Vocabulary,
    pub labels: Labels,
    pub rules: Option<Vec<RuleDef>>,
}

/// Resolved settings shared read-only by the whole run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub vocabulary: Vocabulary,
    pub labels: Labels,
    pub rules: RuleTable,
    /// Where the settings came from (`None` for built-in defaults).
    pub source: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            labels: Labels::default(),
            rules: RuleTable::builtin(),
            source: None,
        }
    }
}

impl Settings {
    /// Resolve the config path (flag, then environment) and load it.
    pub fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file given, using built-in settings");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::input(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        let mut settings = Self::from_toml(&content).map_err(|e| {
            AppError::input(format!("Invalid config '{}': {}", path.display(), e.message()))
        })?;
        settings.source = Some(path.to_path_buf());
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self, AppError> {
        let file: FileConfig =
            toml::from_str(content).map_err(|e| AppError::input(format!("TOML error: {e}")))?;

        if file.labels.headers.len() != OUTPUT_COLUMNS {
            return Err(AppError::input(format!(
                "`labels.headers` must have {OUTPUT_COLUMNS} entries, found {}",
                file.labels.headers.len()
            )));
        }
        if file.vocabulary.skip_marker.trim().is_empty() {
            // An empty marker would be contained in every name.
            return Err(AppError::input("`vocabulary.skip_marker` must not be empty"));
        }

        let rules = match file.rules {
            Some(defs) => build_rule_table(defs)?,
            None => RuleTable::builtin(),
        };
        if rules.is_empty() {
            warn!("config defines an empty rule table; keyword matching is disabled");
        }

        Ok(Self {
            vocabulary: file.vocabulary,
            labels: file.labels,
            rules,
            source: None,
        })
    }
}

fn build_rule_table(defs: Vec<RuleDef>) -> Result<RuleTable, AppError> {
    let mut rules = Vec::with_capacity(defs.len());
    for (idx, def) in defs.into_iter().enumerate() {
        if def.keywords.iter().all(|kw| kw.trim().is_empty()) {
            return Err(AppError::input(format!(
                "rules[{idx}] has no non-blank keywords"
            )));
        }
        let [domain, dept, group, subgroup] = def.category;
        let mut rule = Rule::new(def.keywords, CategoryPath::new(domain, dept, group, subgroup));
        rule.note = def.note;
        rules.push(rule);
    }
    Ok(RuleTable::from_rules(rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_keeps_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.vocabulary, Vocabulary::default());
        assert_eq!(settings.labels, Labels::default());
        assert_eq!(settings.rules, RuleTable::builtin());
    }

    #[test]
    fn partial_vocabulary_overrides_only_given_fields() {
        let settings = Settings::from_toml(
            r#"
[vocabulary]
skip_marker = "NEW ITEM"
review_suffix = "needs review"
"#,
        )
        .unwrap();
        assert_eq!(settings.vocabulary.skip_marker, "NEW ITEM");
        assert_eq!(settings.vocabulary.review_suffix, "needs review");
        assert_eq!(settings.vocabulary.manual_review, Vocabulary::default().manual_review);
    }

    #[test]
    fn rules_array_replaces_builtin_table_in_order() {
        let settings = Settings::from_toml(
            r#"
[[rules]]
keywords = ["red apple"]
category = ["Food", "Produce", "Fruit", "Red Apples"]

[[rules]]
keywords = ["apple"]
category = ["Food", "Produce", "Fruit", "Apples"]
note = "catch-all"
"#,
        )
        .unwrap();
        assert_eq!(settings.rules.len(), 2);
        assert_eq!(
            settings.rules.match_name("red apple basket").map(|c| c.subgroup.as_str()),
            Some("Red Apples")
        );
        assert_eq!(settings.rules.rules()[1].note.as_deref(), Some("catch-all"));
    }

    #[test]
    fn rule_without_keywords_is_rejected() {
        let err = Settings::from_toml(
            r#"
[[rules]]
keywords = ["  "]
category = ["a", "b", "c", "d"]
"#,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
        assert!(err.message().contains("rules[0]"));
    }

    #[test]
    fn wrong_header_count_is_rejected() {
        let err = Settings::from_toml("[labels]\nheaders = [\"a\", \"b\"]\n").unwrap_err();
        assert!(err.message().contains("labels.headers"));
    }

    #[test]
    fn malformed_toml_is_an_input_error() {
        let err = Settings::from_toml("[vocabulary\n").unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_INPUT);
    }

    #[test]
    fn labels_cover_every_status() {
        let labels = Labels::default();
        for status in Status::ALL {
            assert!(!labels.status(status).is_empty());
        }
    }
}
