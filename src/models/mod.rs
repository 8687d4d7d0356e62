// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BusinessRecord, CategoryInfo, CategoryQuery, DataSource, FallbackPolicy, LocationFilter,
    Provider, ProviderPackage, StateCostInfo, StateInfo,
};
pub use requests::{BusinessQuery, UseCaseQuery};
pub use responses::{
    BestForUseCaseResponse, CategorySummary, CostGuideResponse, ErrorResponse, HealthResponse,
    OverviewResponse, StateDirectoryResponse, UseCasePageResponse,
};
