//! Distance API module to communicate to the lookup provider.
//!
//! Handles communication with the distance/duration lookup service, right now
//! we use the Google Distance Matrix REST API.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use trip_distance_shared::trips::{TextValue, TripRequest};

const DISTANCE_MATRIX_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/distancematrix/json";

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Error deserializing JSON response from API.")]
    ResponseConversionErr(serde_json::Error, String),
    #[error("Error from reqwest.")]
    ReqwestErr(reqwest::Error),
    #[error("Response format is unexpected, cannot deserialize.")]
    ResponseUnexpectedFormatErr(String),
    #[error("Bad response from API.")]
    BadResponse(u16),
}

/// Domain-level outcome of a single lookup. A provider that answered but
/// found nothing is `NoRoute`, never a `QueryError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Route {
        distance: TextValue,
        duration: TextValue,
    },
    NoRoute,
}

#[async_trait::async_trait]
pub trait DistanceQuery: Send + Sync {
    async fn lookup(&self, trip: &TripRequest) -> Result<LookupOutcome, QueryError>;
}

pub struct GoogleMapsApiQuery {
    client: reqwest::Client,
    api_key: String,
}

pub struct TestDistanceApiQuery {
    routes: HashMap<(String, String), (TextValue, TextValue)>,
}

// Distance matrix response, trimmed to the fields we actually read.
#[derive(Deserialize)]
struct DistanceMatrixResponse {
    #[serde(default)]
    rows: Vec<MatrixRow>,
}

#[derive(Deserialize)]
struct MatrixRow {
    #[serde(default)]
    elements: Vec<MatrixElement>,
}

#[derive(Deserialize)]
struct MatrixElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

/// Reads the first element of the first row and maps its embedded status to
/// an outcome: `"OK"` with both measures is a route, any other status is a
/// domain miss, anything else is a malformed response.
fn first_element_outcome(body: &str) -> Result<LookupOutcome, QueryError> {
    let resp: DistanceMatrixResponse = serde_json::from_str(body)
        .map_err(|e| QueryError::ResponseConversionErr(e, body.to_string()))?;

    let element = resp
        .rows
        .first()
        .and_then(|row| row.elements.first())
        .ok_or_else(|| {
            QueryError::ResponseUnexpectedFormatErr(
                "Distance matrix response carries no rows or elements".to_string(),
            )
        })?;

    if element.status != "OK" {
        return Ok(LookupOutcome::NoRoute);
    }

    match (&element.distance, &element.duration) {
        (Some(distance), Some(duration)) => Ok(LookupOutcome::Route {
            distance: distance.clone(),
            duration: duration.clone(),
        }),
        _ => Err(QueryError::ResponseUnexpectedFormatErr(
            "Element status is OK but distance or duration is missing".to_string(),
        )),
    }
}

impl GoogleMapsApiQuery {
    pub fn new(api_key: String) -> GoogleMapsApiQuery {
        GoogleMapsApiQuery {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    async fn get_distance_matrix(&self, trip: &TripRequest) -> Result<String, QueryError> {
        let resp = self
            .client
            .get(DISTANCE_MATRIX_ENDPOINT)
            .query(&[
                ("origins", trip.start_input.as_str()),
                ("destinations", trip.destination_input.as_str()),
                ("mode", trip.travel_mode.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QueryError::ReqwestErr(e))?
            .error_for_status()
            .map_err(|e| {
                let status_code = e.status().map(|s| s.as_u16()).unwrap_or(0);
                QueryError::BadResponse(status_code)
            })?
            .text()
            .await
            .map_err(|e| QueryError::ReqwestErr(e))?;

        log::debug!("Response from distance matrix API: {}", resp);

        Ok(resp)
    }
}

#[async_trait::async_trait]
impl DistanceQuery for GoogleMapsApiQuery {
    async fn lookup(&self, trip: &TripRequest) -> Result<LookupOutcome, QueryError> {
        let body = self.get_distance_matrix(trip).await?;
        first_element_outcome(&body)
    }
}

impl TestDistanceApiQuery {
    pub fn new() -> TestDistanceApiQuery {
        TestDistanceApiQuery {
            routes: HashMap::new(),
        }
    }

    pub fn with_route(
        mut self,
        origin: &str,
        destination: &str,
        distance: TextValue,
        duration: TextValue,
    ) -> TestDistanceApiQuery {
        self.routes
            .insert((origin.to_string(), destination.to_string()), (distance, duration));
        self
    }
}

#[async_trait::async_trait]
impl DistanceQuery for TestDistanceApiQuery {
    async fn lookup(&self, trip: &TripRequest) -> Result<LookupOutcome, QueryError> {
        let key = (trip.start_input.clone(), trip.destination_input.clone());
        match self.routes.get(&key) {
            Some((distance, duration)) => Ok(LookupOutcome::Route {
                distance: distance.clone(),
                duration: duration.clone(),
            }),
            None => Ok(LookupOutcome::NoRoute),
        }
    }
}
