//! Subgroup resolution for products whose department and group are already known.

use crate::domain::TaxonomyEntry;
use crate::taxonomy::TaxonomyIndex;

/// Subgroup-name tokens this short are too generic to disambiguate on.
const MIN_TOKEN_CHARS: usize = 3;

/// Pick the best subgroup under `(dept, group)` for an item called `name`.
///
/// - no candidates: `None`
/// - one candidate: that subgroup, whatever the name says
/// - several: the first candidate (taxonomy order) sharing a token with the
///   name, else the first candidate
pub fn resolve_subgroup(dept: &str, group: &str, name: &str, index: &TaxonomyIndex) -> Option<String> {
    let candidates = index.by_dept_group(dept, group);

    let first = candidates.first()?;
    if candidates.len() == 1 {
        return first.subgroup_name.clone();
    }

    let name_lower = name.to_lowercase();
    candidates
        .iter()
        .find(|candidate| shares_token(candidate, &name_lower))
        .unwrap_or(first)
        .subgroup_name
        .clone()
}

fn shares_token(candidate: &TaxonomyEntry, name_lower: &str) -> bool {
    let Some(subgroup) = candidate.subgroup_name.as_deref() else {
        return false;
    };
    subgroup
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .any(|token| name_lower.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::index::tests::entry;

    fn apples_index() -> TaxonomyIndex {
        TaxonomyIndex::build(&[
            entry("Food", "Produce", "Fruit", "Red Apples"),
            entry("Food", "Produce", "Fruit", "Green Apples"),
        ])
    }

    #[test]
    fn single_candidate_wins_regardless_of_name() {
        let index = TaxonomyIndex::build(&[entry("Food", "Produce", "Stone Fruit", "Ripe Fruit")]);
        for name in ["Peaches 1kg", "anything at all", ""] {
            assert_eq!(
                resolve_subgroup("Produce", "Stone Fruit", name, &index).as_deref(),
                Some("Ripe Fruit")
            );
        }
    }

    #[test]
    fn token_match_picks_matching_candidate() {
        let index = apples_index();
        assert_eq!(
            resolve_subgroup("produce", "fruit", "Organic Green Granny Smith 1kg", &index).as_deref(),
            Some("Green Apples")
        );
    }

    #[test]
    fn earlier_candidate_wins_on_any_shared_token() {
        // "apples" is a token of both candidates, so the earlier row is returned
        // even though the later one shares more tokens.
        let index = apples_index();
        assert_eq!(
            resolve_subgroup("Produce", "Fruit", "Organic Green Apples 1kg", &index).as_deref(),
            Some("Red Apples")
        );
    }

    #[test]
    fn falls_back_to_first_candidate() {
        let index = apples_index();
        assert_eq!(
            resolve_subgroup("Produce", "Fruit", "Mixed Fruit Box", &index).as_deref(),
            Some("Red Apples")
        );
    }

    #[test]
    fn short_tokens_are_ignored() {
        let index = TaxonomyIndex::build(&[
            entry("NF", "Home", "Storage", "Big Bins"),
            entry("NF", "Home", "Storage", "XL Jar Set"),
        ]);
        // "xl" is too short to count; "jar" is long enough.
        assert_eq!(
            resolve_subgroup("Home", "Storage", "xl glass jar", &index).as_deref(),
            Some("XL Jar Set")
        );
        assert_eq!(
            resolve_subgroup("Home", "Storage", "xl box", &index).as_deref(),
            Some("Big Bins")
        );
    }

    #[test]
    fn unknown_pair_resolves_to_none() {
        let index = apples_index();
        assert_eq!(resolve_subgroup("Produce", "Vegetables", "Carrots", &index), None);
    }
}
