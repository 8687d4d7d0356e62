mod config;
mod core;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use crate::config::{LoggingSettings, Settings};
use crate::routes::AppState;
use crate::services::{Directory, Taxonomy};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// RUST_LOG wins over the configured level when set
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);
    info!("Starting business directory service...");

    let taxonomy = Taxonomy::embedded().map_err(|e| {
        error!("Failed to parse reference tables: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;

    info!(
        "Reference tables loaded ({} categories, {} states, {} providers)",
        taxonomy.categories().len(),
        taxonomy.states().len(),
        taxonomy.providers().len()
    );

    let directory = Arc::new(Directory::load(
        &settings.data.path,
        taxonomy,
        settings.directory.fallback_enabled,
    ));

    info!(
        "Directory ready: {} businesses across {} states (source: {})",
        directory.len(),
        directory.unique_states().len(),
        directory.source()
    );

    let app_state = AppState {
        directory,
        limits: settings.directory.clone(),
        site: settings.site.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
