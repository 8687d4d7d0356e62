use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::models::BusinessRecord;

/// Result limit used when the caller does not supply one
pub const DEFAULT_LIMIT: usize = 50;

/// Ordering used for every ranked listing: rating descending, then review
/// count descending.
#[inline]
pub fn compare_records(a: &BusinessRecord, b: &BusinessRecord) -> Ordering {
    b.rating
        .partial_cmp(&a.rating)
        .unwrap_or(Ordering::Equal)
        .then_with(|| b.reviews.cmp(&a.reviews))
}

/// Sort in place. The sort is stable, so full ties keep their input order.
pub fn rank<R: Borrow<BusinessRecord>>(records: &mut [R]) {
    records.sort_by(|a, b| {
        compare_records(
            <R as Borrow<BusinessRecord>>::borrow(a),
            <R as Borrow<BusinessRecord>>::borrow(b),
        )
    });
}

/// Rank and truncate to `limit`
pub fn rank_and_limit<R: Borrow<BusinessRecord>>(mut records: Vec<R>, limit: usize) -> Vec<R> {
    rank(&mut records);
    records.truncate(limit);
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, rating: f64, reviews: u32) -> BusinessRecord {
        BusinessRecord {
            name: name.to_string(),
            phone: String::new(),
            address: String::new(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            postal_code: String::new(),
            rating,
            reviews,
            website: String::new(),
            category: "accountant".to_string(),
            kind: String::new(),
        }
    }

    #[test]
    fn test_rating_then_reviews() {
        let records = vec![
            record("low", 4.1, 900),
            record("high-few", 4.9, 10),
            record("high-many", 4.9, 300),
        ];

        let ranked = rank_and_limit(records.iter().collect::<Vec<_>>(), 10);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high-many", "high-few", "low"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let records = vec![
            record("first", 4.5, 20),
            record("second", 4.5, 20),
            record("third", 4.5, 20),
        ];

        let ranked = rank_and_limit(records.iter().collect::<Vec<_>>(), 10);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let records: Vec<_> = (0..30)
            .map(|i| record(&format!("b{}", i), 3.0 + (i % 5) as f64 * 0.4, (i * 7 % 11) as u32))
            .collect();

        let once = rank_and_limit(records.clone(), 100);
        let twice = rank_and_limit(once.clone(), 100);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_truncates_to_limit() {
        let records: Vec<_> = (0..20).map(|i| record(&i.to_string(), 4.0, i)).collect();
        let ranked = rank_and_limit(records, 5);
        assert_eq!(ranked.len(), 5);
        assert_eq!(ranked[0].reviews, 19);
    }
}
