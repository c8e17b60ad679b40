//! Backend crate for the trip-distance web app.
//!
//! Uses actix to serve the lookup proxy: one endpoint that forwards a trip
//! request to the distance provider and relays the normalized result.

pub mod config;
pub mod distance_api;
pub mod web_app;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware, web, App, HttpServer};

use crate::config::ServerConfig;
use crate::distance_api::{DistanceQuery, GoogleMapsApiQuery};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();

    let config = ServerConfig::from_env()?;

    let api: Arc<dyn DistanceQuery> = Arc::new(GoogleMapsApiQuery::new(config.api_key.clone()));
    let api_data = web::Data::from(api);

    log::info!("Server is running on {}:{}", config.host, config.port);

    let allowed_origin = config.allowed_origin.clone();
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(http::header::CONTENT_TYPE);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(api_data.clone())
            .service(web_app::hello)
            .service(web_app::lookup)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
