// Route exports
pub mod businesses;
pub mod errors;
pub mod reference;
pub mod use_cases;

use actix_web::web;
use std::sync::Arc;

use crate::config::{DirectorySettings, SiteSettings};
use crate::services::Directory;

pub use errors::{handle_query_payload_error, ApiError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub limits: DirectorySettings,
    pub site: SiteSettings,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .service(
            web::scope("/api")
                .configure(businesses::configure)
                .configure(use_cases::configure)
                .configure(reference::configure),
        )
        .route("/sitemap.xml", web::get().to(reference::sitemap));
}
