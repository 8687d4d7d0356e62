use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::{
    BestForUseCaseResponse, CostGuideResponse, LocationFilter, UseCasePageResponse, UseCaseQuery,
};
use crate::routes::{ApiError, AppState};

/// Configure use-case page routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/use-cases/{category}", web::get().to(use_case_hub))
        .route("/use-cases/{category}/{state}", web::get().to(use_case_state))
        .route("/best/{category}/{use_case}", web::get().to(best_for_use_case))
        .route("/cost/{state}/{category}", web::get().to(cost_guide));
}

/// Use-case hub page model
///
/// GET /api/use-cases/{category}?city=&limit=
async fn use_case_hub(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<UseCaseQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let category = path.into_inner();
    let limit = query.limit.unwrap_or(state.limits.hub_limit).min(state.limits.max_limit);
    let location = LocationFilter::new(None, query.city.as_deref());

    let directory = &state.directory;
    let taxonomy = directory.taxonomy();
    let result = directory.list_by_category(&category, &location, limit, true);

    Ok(HttpResponse::Ok().json(UseCasePageResponse {
        category_info: taxonomy.category(&category),
        category,
        businesses: result.records,
        showing_fallback: result.used_fallback,
        states: directory.unique_states(),
        top_providers: taxonomy.providers(),
        state: None,
        state_name: None,
        state_costs: None,
    }))
}

/// Use-case x state page model
///
/// GET /api/use-cases/{category}/{state}?city=&limit=
async fn use_case_state(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<UseCaseQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let (category, state_code) = path.into_inner();
    let state_code = state_code.trim().to_ascii_uppercase();
    let limit = query
        .limit
        .unwrap_or(state.limits.state_page_limit)
        .min(state.limits.max_limit);
    let location = LocationFilter::new(Some(&state_code), query.city.as_deref());

    let directory = &state.directory;
    let taxonomy = directory.taxonomy();
    let result = directory.list_by_category(&category, &location, limit, true);

    tracing::info!(
        "Use case '{}' in {}: {} businesses (fallback: {})",
        category,
        state_code,
        result.records.len(),
        result.used_fallback
    );

    Ok(HttpResponse::Ok().json(UseCasePageResponse {
        category_info: taxonomy.category(&category),
        businesses: result.records,
        showing_fallback: result.used_fallback,
        states: directory.unique_states(),
        top_providers: taxonomy.providers(),
        state_name: Some(taxonomy.state_full_name(&state_code).to_string()),
        state_costs: Some(taxonomy.state_costs_or_default(&state_code)),
        state: Some(state_code),
        category,
    }))
}

/// "Best <category> services for <use case>" list
///
/// GET /api/best/{category}/{use_case}?city=&limit=
///
/// Businesses are matched on the use case; `category` only labels the page.
async fn best_for_use_case(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<UseCaseQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let (category, use_case) = path.into_inner();
    let limit = state.limits.effective_limit(query.limit);
    let location = LocationFilter::new(None, query.city.as_deref());

    let directory = &state.directory;
    let result = directory.list_by_category(&use_case, &location, limit, true);

    Ok(HttpResponse::Ok().json(BestForUseCaseResponse {
        use_case_info: directory.taxonomy().category(&use_case),
        businesses: result.records,
        showing_fallback: result.used_fallback,
        category,
        use_case,
    }))
}

/// Cost guide for one category in one state
///
/// GET /api/cost/{state}/{category}?city=&limit=
async fn cost_guide(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<UseCaseQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;
    let (state_code, category) = path.into_inner();
    let state_code = state_code.trim().to_ascii_uppercase();
    let limit = state.limits.effective_limit(query.limit);
    let location = LocationFilter::new(Some(&state_code), query.city.as_deref());

    let directory = &state.directory;
    let taxonomy = directory.taxonomy();
    let result = directory.list_by_category(&category, &location, limit, true);

    Ok(HttpResponse::Ok().json(CostGuideResponse {
        state_name: taxonomy.state_full_name(&state_code).to_string(),
        costs: taxonomy.state_costs_or_default(&state_code),
        state: state_code,
        category_info: taxonomy.category(&category),
        businesses: result.records,
        showing_fallback: result.used_fallback,
        category,
    }))
}
