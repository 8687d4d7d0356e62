use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::filter_by_location;
use crate::models::{
    BusinessQuery, HealthResponse, LocationFilter, OverviewResponse, StateDirectoryResponse,
};
use crate::routes::{ApiError, AppState};

/// Configure listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/overview", web::get().to(overview))
        .route("/businesses", web::get().to(list_businesses))
        .route("/states", web::get().to(list_states))
        .route("/states/{state}", web::get().to(state_directory));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let directory = &state.directory;
    let status = if directory.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        records: directory.len(),
        source: directory.source().clone(),
        timestamp: chrono::Utc::now(),
    })
}

/// Home page model
///
/// GET /api/overview
async fn overview(state: web::Data<AppState>) -> impl Responder {
    let directory = &state.directory;

    HttpResponse::Ok().json(OverviewResponse {
        total_businesses: directory.len(),
        states: directory.unique_states(),
        states_count: directory.taxonomy().states().len(),
        top_rated: directory.top_rated(state.limits.top_rated_limit),
    })
}

/// List businesses
///
/// GET /api/businesses?state=CA&city=Los%20Angeles&category=plumbers&limit=20
///
/// With a category the use-case matcher runs (fallback allowed); without one
/// the listing is filtered by location only. Returns a bare JSON array.
async fn list_businesses(
    state: web::Data<AppState>,
    query: web::Query<BusinessQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let limit = state.limits.effective_limit(query.limit);
    let location = query.location();
    let directory = &state.directory;

    let businesses = match query.category_slug() {
        Some(slug) => {
            let result = directory.list_by_category(slug, &location, limit, true);
            tracing::info!(
                "Category '{}' matched {} businesses (fallback: {})",
                slug,
                result.records.len(),
                result.used_fallback
            );
            result.records
        }
        None => directory.list_by_location(&location, limit),
    };

    Ok(HttpResponse::Ok().json(businesses))
}

/// GET /api/states
async fn list_states(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.directory.unique_states())
}

/// State browse page: costs plus the best listings of every city
///
/// GET /api/states/{state}
async fn state_directory(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let code = path.into_inner().trim().to_ascii_uppercase();
    let directory = &state.directory;
    let taxonomy = directory.taxonomy();

    let cities = directory.ranked_cities(&code, state.limits.top_rated_limit);
    if cities.is_empty() && taxonomy.state(&code).is_none() {
        return Err(ApiError::UnknownState(code));
    }

    let total_businesses = filter_by_location(directory.records(), &LocationFilter::state(&code)).len();

    Ok(HttpResponse::Ok().json(StateDirectoryResponse {
        state_name: taxonomy.state_full_name(&code).to_string(),
        costs: taxonomy.state_costs_or_default(&code),
        state: code,
        total_businesses,
        cities,
    }))
}
