//! Main web app module containing web routings to access API etc.

use actix_web::{get, post, web, HttpResponse, Responder};
use trip_distance_shared::trips::{TripRequest, TripResult};

use crate::distance_api::{DistanceQuery, LookupOutcome};

#[get("/")]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Welcome! Enter a starting point, destination, and mode of travel.")
}

/// Endpoint for running a distance/duration lookup through the provider.
///
/// A domain miss still answers 200 with the ERROR-shaped body; only
/// transport faults answer 500.
#[post("/")]
pub async fn lookup(
    api: web::Data<dyn DistanceQuery>,
    json: web::Json<TripRequest>,
) -> impl Responder {
    match api.lookup(&json).await {
        Ok(LookupOutcome::Route { distance, duration }) => {
            HttpResponse::Ok().json(TripResult::found(distance, duration))
        }
        Ok(LookupOutcome::NoRoute) => HttpResponse::Ok().json(TripResult::not_found()),
        Err(e) => {
            log::error!(
                "Lookup {} -> {} failed: {}",
                json.start_input,
                json.destination_input,
                e
            );
            HttpResponse::InternalServerError().body("Internal Server Error")
        }
    }
}
