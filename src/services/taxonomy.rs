//! Static reference tables: use-case categories with their keyword synonyms,
//! state names and formation costs, and the featured formation providers.
//!
//! The tables live in `data/*.toml` and are compiled into the binary. They are
//! parsed once at startup into a [`Taxonomy`], which is read-only afterwards.

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{CategoryInfo, FallbackPolicy, Provider, StateCostInfo, StateInfo};

const CATEGORIES_TOML: &str = include_str!("../../data/categories.toml");
const STATES_TOML: &str = include_str!("../../data/states.toml");
const PROVIDERS_TOML: &str = include_str!("../../data/providers.toml");

/// Errors in the reference tables
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("Failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: toml::de::Error,
    },

    #[error("Duplicate category slug: {0}")]
    DuplicateCategory(String),

    #[error("Duplicate state code: {0}")]
    DuplicateState(String),
}

#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    fallback: FallbackPolicy,
    #[serde(rename = "category", default)]
    categories: Vec<CategoryEntry>,
}

#[derive(Debug, Deserialize)]
struct CategoryEntry {
    slug: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    synonyms: Vec<String>,
}

impl From<CategoryEntry> for CategoryInfo {
    fn from(entry: CategoryEntry) -> Self {
        let title = entry.title.unwrap_or_else(|| default_title(&entry.slug));
        Self {
            slug: entry.slug,
            title,
            description: entry.description,
            synonyms: entry.synonyms,
        }
    }
}

#[derive(Debug, Deserialize)]
struct StateFile {
    #[serde(rename = "state", default)]
    states: Vec<StateInfo>,
}

#[derive(Debug, Deserialize)]
struct ProviderFile {
    #[serde(rename = "provider", default)]
    providers: Vec<Provider>,
}

/// "hvac-technicians" -> "LLC Registration Services for Hvac Technicians"
fn default_title(slug: &str) -> String {
    let words: Vec<String> = slug
        .split(|c: char| c == '-' || c == '_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    format!("LLC Registration Services for {}", words.join(" "))
}

/// Parsed reference tables
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<CategoryInfo>,
    category_index: HashMap<String, usize>,
    fallback: FallbackPolicy,
    states: Vec<StateInfo>,
    state_index: HashMap<String, usize>,
    providers: Vec<Provider>,
}

impl Taxonomy {
    /// Parse the tables compiled into the binary
    pub fn embedded() -> Result<Self, TaxonomyError> {
        Self::from_toml_strs(CATEGORIES_TOML, STATES_TOML, PROVIDERS_TOML)
    }

    pub fn from_toml_strs(
        categories: &str,
        states: &str,
        providers: &str,
    ) -> Result<Self, TaxonomyError> {
        let category_file: CategoryFile = toml::from_str(categories)
            .map_err(|source| TaxonomyError::Parse { table: "categories", source })?;
        let state_file: StateFile = toml::from_str(states)
            .map_err(|source| TaxonomyError::Parse { table: "states", source })?;
        let provider_file: ProviderFile = toml::from_str(providers)
            .map_err(|source| TaxonomyError::Parse { table: "providers", source })?;

        let categories: Vec<CategoryInfo> = category_file
            .categories
            .into_iter()
            .map(CategoryInfo::from)
            .collect();

        let mut category_index = HashMap::with_capacity(categories.len());
        for (i, category) in categories.iter().enumerate() {
            if category_index.insert(category.slug.to_ascii_lowercase(), i).is_some() {
                return Err(TaxonomyError::DuplicateCategory(category.slug.clone()));
            }
        }

        let mut state_index = HashMap::with_capacity(state_file.states.len());
        for (i, state) in state_file.states.iter().enumerate() {
            if state_index.insert(state.code.to_ascii_uppercase(), i).is_some() {
                return Err(TaxonomyError::DuplicateState(state.code.clone()));
            }
        }

        Ok(Self {
            categories,
            category_index,
            fallback: category_file.fallback,
            states: state_file.states,
            state_index,
            providers: provider_file.providers,
        })
    }

    pub fn categories(&self) -> &[CategoryInfo] {
        &self.categories
    }

    pub fn category(&self, slug: &str) -> Option<&CategoryInfo> {
        self.category_index
            .get(&slug.trim().to_ascii_lowercase())
            .map(|&i| &self.categories[i])
    }

    pub fn fallback(&self) -> &FallbackPolicy {
        &self.fallback
    }

    pub fn states(&self) -> &[StateInfo] {
        &self.states
    }

    pub fn state(&self, code: &str) -> Option<&StateInfo> {
        self.state_index
            .get(&code.trim().to_ascii_uppercase())
            .map(|&i| &self.states[i])
    }

    /// Full state name, or the code itself when it is not in the table
    pub fn state_full_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.state(code).map(|s| s.name.as_str()).unwrap_or(code)
    }

    /// Formation costs, with generic figures for codes not in the table
    pub fn state_costs_or_default(&self, code: &str) -> StateCostInfo {
        self.state(code)
            .map(|s| s.costs.clone())
            .unwrap_or_default()
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }
}
