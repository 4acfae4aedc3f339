// Aggregation strategies for census batches
// Author: Gabriel Demetrios Lafis

use std::collections::{HashMap, HashSet};

use crate::api::models::AggregationRecord;

/// Count occurrences of each distinct value.
///
/// Produces one record per distinct value actually observed, in
/// first-seen order. Categories absent from the input never appear,
/// not even with a zero count. Matching is exact: no trimming, no case
/// folding.
pub fn count_categories<'a, I>(values: I) -> Vec<AggregationRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, i64> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for value in values {
        let count = counts.entry(value).or_insert(0);
        if *count == 0 {
            order.push(value);
        }
        *count += 1;
    }

    order
        .into_iter()
        .map(|name| AggregationRecord::new(name, counts[name]))
        .collect()
}

/// Score each distinct password string.
///
/// Unlike the categorical counter, the value is a per-string complexity
/// score, not an occurrence count; duplicate passwords collapse into a
/// single record keyed by the password text.
pub fn score_passwords<'a, I>(values: I) -> Vec<AggregationRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut records = Vec::new();

    for value in values {
        if seen.insert(value) {
            records.push(AggregationRecord::new(value, password_complexity(value)));
        }
    }

    records
}

/// Complexity score of a single password string.
///
/// Inferred rule, pending product-owner confirmation: one point per
/// character outside `[a-zA-Z0-9]`, so a password made only of letters
/// and digits scores 0 no matter how many digits it contains.
pub fn password_complexity(password: &str) -> i64 {
    password
        .chars()
        .filter(|c| !c.is_ascii_alphanumeric())
        .count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_categories_first_seen_order() {
        let records = count_categories(vec!["US", "UK", "US", "CA"]);
        assert_eq!(
            records,
            vec![
                AggregationRecord::new("US", 2),
                AggregationRecord::new("UK", 1),
                AggregationRecord::new("CA", 1),
            ]
        );
    }

    #[test]
    fn test_count_categories_single_bucket() {
        let records = count_categories(vec!["male", "male", "male", "male"]);
        assert_eq!(records, vec![AggregationRecord::new("male", 4)]);
    }

    #[test]
    fn test_count_categories_exact_match() {
        // "USA" is its own bucket, never merged into "US"
        let records = count_categories(vec!["US", "USA"]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_password_complexity_observed_scores() {
        for (password, score) in [
            ("abc123", 0),
            ("abc#$!", 3),
            ("ab12*@", 2),
            ("@bc#", 2),
            ("000#$%", 3),
            ("xyz123", 0),
        ] {
            assert_eq!(
                password_complexity(password),
                score,
                "password '{}'",
                password
            );
        }
    }

    #[test]
    fn test_password_complexity_empty_string() {
        assert_eq!(password_complexity(""), 0);
    }

    #[test]
    fn test_score_passwords_collapses_duplicates() {
        let records = score_passwords(vec!["abc#$!", "abc123", "abc#$!"]);
        assert_eq!(
            records,
            vec![
                AggregationRecord::new("abc#$!", 3),
                AggregationRecord::new("abc123", 0),
            ]
        );
    }
}
