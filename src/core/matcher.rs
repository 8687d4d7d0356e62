use std::collections::HashMap;

use crate::core::{filters::matches_location, ranking::rank_and_limit};
use crate::models::{BusinessRecord, CategoryInfo, CategoryQuery, FallbackPolicy};

/// Record fields a search term is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchFields {
    /// category, type and name
    All,
    /// category and type only
    Classification,
}

/// Case-insensitive substring match of any term against the selected fields.
///
/// Terms must already be lower-cased.
#[inline]
pub fn matches_terms(record: &BusinessRecord, terms: &[String], fields: MatchFields) -> bool {
    contains_any(&record.category, terms)
        || contains_any(&record.kind, terms)
        || (fields == MatchFields::All && contains_any(&record.name, terms))
}

fn contains_any(field: &str, terms: &[String]) -> bool {
    if field.is_empty() {
        return false;
    }
    let haystack = field.to_lowercase();
    terms.iter().any(|term| haystack.contains(term.as_str()))
}

fn lowercase_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Result of the category matching process
#[derive(Debug)]
pub struct CategoryMatch<'a> {
    pub records: Vec<&'a BusinessRecord>,
    /// True when the primary filter came back empty and the generic
    /// business-service terms supplied these records instead
    pub used_fallback: bool,
}

/// Category matching orchestrator
///
/// # Pipeline Stages
/// 1. Keyword filter (slug synonyms, or the slug itself as a phrase)
/// 2. Location filter
/// 3. Ranking and truncation
/// 4. Optional widening to generic business-service terms when 1-3 yield nothing
#[derive(Debug, Clone)]
pub struct CategoryMatcher {
    synonyms: HashMap<String, Vec<String>>,
    fallback: FallbackPolicy,
    fallback_enabled: bool,
}

impl CategoryMatcher {
    pub fn new(categories: &[CategoryInfo], fallback: &FallbackPolicy, fallback_enabled: bool) -> Self {
        let synonyms = categories
            .iter()
            .map(|c| (c.slug.to_ascii_lowercase(), lowercase_terms(&c.synonyms)))
            .collect();

        let fallback = FallbackPolicy {
            exempt: fallback.exempt.iter().map(|s| s.to_ascii_lowercase()).collect(),
            terms: lowercase_terms(&fallback.terms),
        };

        Self {
            synonyms,
            fallback,
            fallback_enabled,
        }
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback_enabled
    }

    /// Lower-cased search terms for a slug.
    ///
    /// Known slugs use their synonym set. Unknown slugs become a single phrase
    /// with hyphens and underscores replaced by spaces.
    pub fn search_terms(&self, slug: &str) -> Vec<String> {
        let key = slug.trim().to_ascii_lowercase();
        if let Some(terms) = self.synonyms.get(&key) {
            return terms.clone();
        }

        let phrase = key.replace(|c: char| c == '-' || c == '_', " ");
        let phrase = phrase.trim();
        if phrase.is_empty() {
            Vec::new()
        } else {
            vec![phrase.to_string()]
        }
    }

    /// Find, rank and limit the records for a category query
    pub fn find_matches<'a>(
        &self,
        records: &'a [BusinessRecord],
        query: &CategoryQuery,
    ) -> CategoryMatch<'a> {
        let slug = query.slug.trim().to_ascii_lowercase();
        let terms = self.search_terms(&slug);

        let primary: Vec<&BusinessRecord> = records
            .iter()
            // Stage 1: keyword filter. A blank slug applies no category restriction.
            .filter(|record| slug.is_empty() || matches_terms(record, &terms, MatchFields::All))
            // Stage 2: location filter
            .filter(|record| matches_location(record, &query.location))
            .collect();

        if !primary.is_empty() || !self.should_widen(&slug, query.allow_fallback) {
            return CategoryMatch {
                records: rank_and_limit(primary, query.limit),
                used_fallback: false,
            };
        }

        tracing::info!(
            "No specific results for category '{}', showing general business services",
            slug
        );

        // Stage 4: generic terms against category and type only
        let widened: Vec<&BusinessRecord> = records
            .iter()
            .filter(|record| matches_location(record, &query.location))
            .filter(|record| matches_terms(record, &self.fallback.terms, MatchFields::Classification))
            .collect();

        CategoryMatch {
            used_fallback: !widened.is_empty(),
            records: rank_and_limit(widened, query.limit),
        }
    }

    fn should_widen(&self, slug: &str, allow_fallback: bool) -> bool {
        self.fallback_enabled
            && allow_fallback
            && !slug.is_empty()
            && !self.fallback.exempt.iter().any(|exempt| exempt == slug)
    }
}
