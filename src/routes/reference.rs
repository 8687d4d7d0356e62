use actix_web::{web, HttpResponse, Responder};

use crate::models::CategorySummary;
use crate::routes::AppState;
use crate::services::render_sitemap;

/// Configure reference data routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/reference/state-costs", web::get().to(state_costs))
        .route("/reference/providers", web::get().to(providers))
        .route("/reference/categories", web::get().to(categories));
}

/// GET /api/reference/state-costs
async fn state_costs(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.directory.taxonomy().states())
}

/// GET /api/reference/providers
async fn providers(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.directory.taxonomy().providers())
}

/// GET /api/reference/categories
async fn categories(state: web::Data<AppState>) -> impl Responder {
    let summaries: Vec<CategorySummary<'_>> = state
        .directory
        .taxonomy()
        .categories()
        .iter()
        .map(CategorySummary::from)
        .collect();

    HttpResponse::Ok().json(summaries)
}

/// GET /sitemap.xml
///
/// One use-case x state page per state in the cost table, whether or not
/// the loaded data has listings there.
pub async fn sitemap(state: web::Data<AppState>) -> impl Responder {
    let taxonomy = state.directory.taxonomy();
    let codes: Vec<String> = taxonomy.states().iter().map(|s| s.code.clone()).collect();
    let body = render_sitemap(&state.site.base_url, taxonomy, &codes);

    HttpResponse::Ok().content_type("application/xml").body(body)
}
