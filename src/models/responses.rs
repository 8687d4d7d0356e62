use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::domain::{BusinessRecord, CategoryInfo, DataSource, Provider, StateCostInfo};

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub records: usize,
    pub source: DataSource,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Home page model
#[derive(Debug, Clone, Serialize)]
pub struct OverviewResponse<'a> {
    pub total_businesses: usize,
    pub states: Vec<String>,
    pub states_count: usize,
    pub top_rated: Vec<&'a BusinessRecord>,
}

/// State browse page model: cities with their best-ranked listings
#[derive(Debug, Clone, Serialize)]
pub struct StateDirectoryResponse<'a> {
    pub state: String,
    pub state_name: String,
    pub costs: StateCostInfo,
    pub total_businesses: usize,
    pub cities: BTreeMap<String, Vec<&'a BusinessRecord>>,
}

/// Use-case hub (and use-case x state) page model
#[derive(Debug, Clone, Serialize)]
pub struct UseCasePageResponse<'a> {
    pub category: String,
    /// Absent for ad-hoc slugs that have no table entry
    pub category_info: Option<&'a CategoryInfo>,
    pub businesses: Vec<&'a BusinessRecord>,
    pub showing_fallback: bool,
    pub states: Vec<String>,
    pub top_providers: &'a [Provider],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_costs: Option<StateCostInfo>,
}

/// "Best <category> services for <use case>" list model
#[derive(Debug, Clone, Serialize)]
pub struct BestForUseCaseResponse<'a> {
    pub category: String,
    pub use_case: String,
    pub use_case_info: Option<&'a CategoryInfo>,
    pub businesses: Vec<&'a BusinessRecord>,
    pub showing_fallback: bool,
}

/// Formation cost guide for one category in one state
#[derive(Debug, Clone, Serialize)]
pub struct CostGuideResponse<'a> {
    pub state: String,
    pub state_name: String,
    pub costs: StateCostInfo,
    pub category: String,
    pub category_info: Option<&'a CategoryInfo>,
    pub businesses: Vec<&'a BusinessRecord>,
    pub showing_fallback: bool,
}

/// Category listing entry for the reference endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary<'a> {
    pub slug: &'a str,
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl<'a> From<&'a CategoryInfo> for CategorySummary<'a> {
    fn from(info: &'a CategoryInfo) -> Self {
        Self {
            slug: &info.slug,
            title: &info.title,
            description: info.description.as_deref(),
        }
    }
}
