// Top-N ranking of aggregation records
// Author: Gabriel Demetrios Lafis

use crate::api::models::AggregationRecord;

/// Keep the `top` highest-valued records, ordered by value descending.
///
/// The sort is stable, so records with equal values keep their
/// first-seen input order. The bound has already been validated to be a
/// proper subset size (0 < top < record count).
pub fn top_n(mut records: Vec<AggregationRecord>, top: usize) -> Vec<AggregationRecord> {
    records.sort_by(|a, b| b.value.cmp(&a.value));
    records.truncate(top);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_n_orders_by_value_descending() {
        let records = vec![
            AggregationRecord::new("UK", 3),
            AggregationRecord::new("US", 4),
            AggregationRecord::new("AU", 2),
            AggregationRecord::new("NZ", 1),
        ];

        let ranked = top_n(records, 2);
        assert_eq!(
            ranked,
            vec![
                AggregationRecord::new("US", 4),
                AggregationRecord::new("UK", 3),
            ]
        );
    }

    #[test]
    fn test_top_n_ties_keep_first_seen_order() {
        let records = vec![
            AggregationRecord::new("AE", 1),
            AggregationRecord::new("MC", 1),
            AggregationRecord::new("US", 5),
        ];

        let ranked = top_n(records, 2);
        assert_eq!(
            ranked,
            vec![
                AggregationRecord::new("US", 5),
                AggregationRecord::new("AE", 1),
            ]
        );
    }
}
