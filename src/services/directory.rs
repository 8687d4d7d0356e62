use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::core::{
    filter_by_location, group_by_city, group_by_state, rank_and_limit, CategoryMatch,
    CategoryMatcher, CityBuckets, StateBuckets,
};
use crate::models::{BusinessRecord, CategoryQuery, DataSource, LocationFilter};
use crate::services::loader;
use crate::services::taxonomy::Taxonomy;

/// Read-only business directory.
///
/// Built once at startup and shared by every request handler. Nothing in
/// here mutates after construction, so concurrent readers need no locking.
#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<BusinessRecord>,
    source: DataSource,
    taxonomy: Taxonomy,
    matcher: CategoryMatcher,
}

impl Directory {
    pub fn new(
        records: Vec<BusinessRecord>,
        source: DataSource,
        taxonomy: Taxonomy,
        fallback_enabled: bool,
    ) -> Self {
        let matcher = CategoryMatcher::new(taxonomy.categories(), taxonomy.fallback(), fallback_enabled);
        Self {
            records,
            source,
            taxonomy,
            matcher,
        }
    }

    /// One-time initialization from a listing file.
    ///
    /// Never fails: a missing or unreadable file is logged and the embedded
    /// sample dataset is served instead.
    pub fn load(path: &Path, taxonomy: Taxonomy, fallback_enabled: bool) -> Self {
        let (records, source) = match loader::load_path(path) {
            Ok(report) => {
                tracing::info!(
                    "Loaded {} business records from {} ({} rows dropped)",
                    report.records.len(),
                    path.display(),
                    report.rejected
                );
                (report.records, DataSource::File(path.to_path_buf()))
            }
            Err(e) => {
                tracing::warn!("{}; serving embedded sample data", e);
                (loader::sample_records(), DataSource::EmbeddedSample)
            }
        };

        Self::new(records, source, taxonomy, fallback_enabled)
    }

    pub fn records(&self) -> &[BusinessRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn fallback_enabled(&self) -> bool {
        self.matcher.fallback_enabled()
    }

    /// Sorted, de-duplicated state codes present in the data
    pub fn unique_states(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted, de-duplicated cities of one state
    pub fn cities_in(&self, state: &str) -> Vec<String> {
        filter_by_location(&self.records, &LocationFilter::state(state))
            .into_iter()
            .map(|r| r.city.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records in a state and/or city, best first
    pub fn list_by_location(&self, location: &LocationFilter, limit: usize) -> Vec<&BusinessRecord> {
        rank_and_limit(filter_by_location(&self.records, location), limit)
    }

    /// Records matching a use-case category, best first.
    ///
    /// With `allow_fallback` (and fallback enabled in configuration) an empty
    /// result is widened to generic business services; see
    /// [`CategoryMatch::used_fallback`].
    pub fn list_by_category(
        &self,
        slug: &str,
        location: &LocationFilter,
        limit: usize,
        allow_fallback: bool,
    ) -> CategoryMatch<'_> {
        let query = CategoryQuery {
            slug: slug.to_string(),
            location: location.clone(),
            limit,
            allow_fallback,
        };
        self.matcher.find_matches(&self.records, &query)
    }

    pub fn top_rated(&self, limit: usize) -> Vec<&BusinessRecord> {
        rank_and_limit(self.records.iter().collect(), limit)
    }

    pub fn group_by_state(&self) -> StateBuckets<'_> {
        group_by_state(&self.records)
    }

    /// City buckets, optionally restricted to one state
    pub fn group_by_city(&self, state: Option<&str>) -> CityBuckets<'_> {
        let location = LocationFilter::new(state, None);
        group_by_city(filter_by_location(&self.records, &location))
    }

    /// Per-city listings of one state, each ranked and limited
    pub fn ranked_cities(&self, state: &str, per_city: usize) -> BTreeMap<String, Vec<&BusinessRecord>> {
        self.group_by_city(Some(state))
            .into_values()
            .flatten()
            .map(|(city, records)| (city, rank_and_limit(records, per_city)))
            .collect()
    }
}
