//! JSON request and response bodies.
//!
//! Mirrors the shape a web front end posts: a list of locations and the
//! travel-time matrix between them, answered with the ordered shortest path.
//! JSON has no literal for infinity, so `null` marks an unreachable leg.

use serde::{Deserialize, Serialize};

use crate::distance::{TravelTimeMatrix, TravelTimeProvider};
use crate::error::{Error, Result};
use crate::models::{Leg, Tour};

/// A route request: locations plus their pairwise travel times.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::TravelTimeProvider;
/// use route_optimizer::request::RouteRequest;
///
/// let request: RouteRequest = serde_json::from_str(
///     r#"{ "locations": ["A", "B"], "matrix": [[null, 10], [15, null]] }"#,
/// )
/// .unwrap();
/// let tm = request.travel_times(&request.locations).unwrap();
/// assert_eq!(tm.get(0, 1), 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    pub locations: Vec<String>,
    pub matrix: Vec<Vec<Option<f64>>>,
}

impl TravelTimeProvider for RouteRequest {
    fn travel_times(&self, locations: &[String]) -> Result<TravelTimeMatrix> {
        if locations != self.locations.as_slice() {
            return Err(Error::invalid_input(
                "requested locations do not match the request body",
            ));
        }
        if self.matrix.len() != self.locations.len() {
            return Err(Error::invalid_input(format!(
                "matrix has {} rows for {} locations",
                self.matrix.len(),
                self.locations.len()
            )));
        }
        TravelTimeMatrix::from_optional_rows(&self.matrix)
    }
}

/// The optimized route, serialized as `{ "shortestPath": [...], "totalTime": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub shortest_path: Vec<Leg>,
    pub total_time: f64,
}

impl From<Tour> for RouteResponse {
    fn from(tour: Tour) -> Self {
        let total_time = tour.total_time();
        Self {
            shortest_path: tour.into_legs(),
            total_time,
        }
    }
}
