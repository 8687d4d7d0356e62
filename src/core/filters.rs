use std::collections::BTreeMap;

use crate::models::{BusinessRecord, LocationFilter};

/// state -> records
pub type StateBuckets<'a> = BTreeMap<String, Vec<&'a BusinessRecord>>;
/// state -> city -> records
pub type CityBuckets<'a> = BTreeMap<String, BTreeMap<String, Vec<&'a BusinessRecord>>>;

/// Check a record against an optional state/city restriction.
///
/// State comparison ignores ASCII case; city comparison is exact on the
/// trimmed value.
#[inline]
pub fn matches_location(record: &BusinessRecord, filter: &LocationFilter) -> bool {
    if let Some(state) = &filter.state {
        if !record.state.eq_ignore_ascii_case(state) {
            return false;
        }
    }

    if let Some(city) = &filter.city {
        if record.city != *city {
            return false;
        }
    }

    true
}

/// Flat location filter, preserving input order
pub fn filter_by_location<'a, I>(records: I, filter: &LocationFilter) -> Vec<&'a BusinessRecord>
where
    I: IntoIterator<Item = &'a BusinessRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_location(record, filter))
        .collect()
}

/// Group records into per-state buckets. Buckets keep input order.
pub fn group_by_state<'a, I>(records: I) -> StateBuckets<'a>
where
    I: IntoIterator<Item = &'a BusinessRecord>,
{
    let mut buckets = StateBuckets::new();
    for record in records {
        buckets.entry(record.state.clone()).or_default().push(record);
    }
    buckets
}

/// Group records into city-within-state buckets
pub fn group_by_city<'a, I>(records: I) -> CityBuckets<'a>
where
    I: IntoIterator<Item = &'a BusinessRecord>,
{
    let mut buckets = CityBuckets::new();
    for record in records {
        buckets
            .entry(record.state.clone())
            .or_default()
            .entry(record.city.clone())
            .or_default()
            .push(record);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_record(name: &str, city: &str, state: &str) -> BusinessRecord {
        BusinessRecord {
            name: name.to_string(),
            phone: String::new(),
            address: String::new(),
            city: city.to_string(),
            state: state.to_string(),
            postal_code: String::new(),
            rating: 4.5,
            reviews: 10,
            website: String::new(),
            category: "accountant".to_string(),
            kind: String::new(),
        }
    }

    fn create_records() -> Vec<BusinessRecord> {
        vec![
            create_record("a", "Los Angeles", "CA"),
            create_record("b", "San Diego", "CA"),
            create_record("c", "Austin", "TX"),
            create_record("d", "Los Angeles", "CA"),
        ]
    }

    #[test]
    fn test_state_filter_ignores_case() {
        let records = create_records();
        let filtered = filter_by_location(&records, &LocationFilter::state("ca"));
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.state == "CA"));
    }

    #[test]
    fn test_city_filter_is_exact() {
        let records = create_records();

        let filter = LocationFilter::state("CA").with_city(" Los Angeles ");
        let names: Vec<_> = filter_by_location(&records, &filter)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "d"]);

        let filter = LocationFilter::state("CA").with_city("los angeles");
        assert!(filter_by_location(&records, &filter).is_empty());
    }

    #[test]
    fn test_unrestricted_filter_keeps_all() {
        let records = create_records();
        assert_eq!(filter_by_location(&records, &LocationFilter::any()).len(), 4);
    }

    #[test]
    fn test_group_by_state() {
        let records = create_records();
        let buckets = group_by_state(&records);
        assert_eq!(buckets.keys().collect::<Vec<_>>(), vec!["CA", "TX"]);
        assert_eq!(buckets["CA"].len(), 3);
    }

    #[test]
    fn test_group_by_city() {
        let records = create_records();
        let buckets = group_by_city(&records);
        assert_eq!(buckets["CA"]["Los Angeles"].len(), 2);
        assert_eq!(buckets["CA"]["San Diego"].len(), 1);
        assert_eq!(buckets["TX"]["Austin"][0].name, "c");
    }
}
