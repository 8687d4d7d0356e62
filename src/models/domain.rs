use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A single business listing, normalized at load time.
///
/// Records are immutable once the directory is built. Field names on the wire
/// follow the source data columns (`full_address`, `site`, `type`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRecord {
    pub name: String,
    pub phone: String,
    #[serde(rename = "full_address")]
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub rating: f64,
    pub reviews: u32,
    #[serde(rename = "site")]
    pub website: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Optional state/city restriction applied before ranking.
///
/// The state is stored upper-cased and the city trimmed; blank inputs mean
/// "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub state: Option<String>,
    pub city: Option<String>,
}

impl LocationFilter {
    pub fn new(state: Option<&str>, city: Option<&str>) -> Self {
        Self {
            state: non_blank(state).map(|s| s.to_ascii_uppercase()),
            city: non_blank(city).map(str::to_string),
        }
    }

    /// Filter that lets every record through
    pub fn any() -> Self {
        Self::default()
    }

    pub fn state(state: &str) -> Self {
        Self::new(Some(state), None)
    }

    pub fn with_city(mut self, city: &str) -> Self {
        self.city = non_blank(Some(city)).map(str::to_string);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.state.is_none() && self.city.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Category query handed to the matcher
#[derive(Debug, Clone)]
pub struct CategoryQuery {
    pub slug: String,
    pub location: LocationFilter,
    pub limit: usize,
    pub allow_fallback: bool,
}

/// Use-case category with its keyword synonyms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub slug: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub synonyms: Vec<String>,
}

/// Generic professional-service terms used to widen an empty category result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FallbackPolicy {
    /// Slugs that never widen
    pub exempt: Vec<String>,
    pub terms: Vec<String>,
}

/// First-year LLC formation costs for a state, in US dollars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCostInfo {
    pub filing_fee: f64,
    pub annual_report_fee: f64,
    pub registered_agent_fee: f64,
    pub first_year_total: f64,
    pub registration_url: String,
}

impl Default for StateCostInfo {
    fn default() -> Self {
        Self {
            filing_fee: 100.0,
            annual_report_fee: 50.0,
            registered_agent_fee: 50.0,
            first_year_total: 150.0,
            registration_url: "https://www.sos.gov".to_string(),
        }
    }
}

/// State reference entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateInfo {
    pub code: String,
    pub name: String,
    #[serde(flatten)]
    pub costs: StateCostInfo,
}

/// Featured formation service provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation_includes: Option<String>,
    pub renewal_cost: String,
    pub renewal_note: String,
    pub community_feedback: String,
    pub rating: f64,
    pub reviews: u32,
    pub website: String,
    pub phone: String,
    pub description: String,
    pub popularity: String,
    #[serde(rename = "package", default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<ProviderPackage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderPackage {
    pub id: String,
    pub name: String,
    pub cost: String,
    pub description: String,
}

/// Where the resident records came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    EmbeddedSample,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::EmbeddedSample => write!(f, "embedded sample"),
        }
    }
}

impl Serialize for DataSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
