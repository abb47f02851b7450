//! Caller-side wrapper around the exact search.
//!
//! [`exact::optimize`](crate::exact::optimize) has no ceiling and no clock.
//! [`RouteOptimizer`] adds both: it refuses inputs above a configured size
//! and, when a time limit is set, abandons the search with
//! [`Error::Timeout`] once the limit elapses.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::distance::{TravelTimeMatrix, TravelTimeProvider};
use crate::error::{Error, Result};
use crate::exact::{self, count_permutations};
use crate::models::Tour;

/// Default ceiling on the number of locations (9! = 362 880 candidate tours).
pub const DEFAULT_MAX_LOCATIONS: usize = 10;

/// Limits applied by [`RouteOptimizer`].
///
/// # Examples
///
/// ```
/// use route_optimizer::optimizer::OptimizerConfig;
///
/// let config: OptimizerConfig = serde_json::from_str(r#"{ "timeLimitMs": 500 }"#).unwrap();
/// assert_eq!(config.max_locations, 10);
/// assert_eq!(config.time_limit().unwrap().as_millis(), 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Largest accepted location count, origin included.
    pub max_locations: usize,
    /// Wall-clock budget for one search, in milliseconds. `None` waits for
    /// the search to finish.
    pub time_limit_ms: Option<u64>,
}

impl OptimizerConfig {
    /// The time limit as a [`Duration`].
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_locations: DEFAULT_MAX_LOCATIONS,
            time_limit_ms: None,
        }
    }
}

/// Runs the exact search under an [`OptimizerConfig`].
///
/// Holds no state between calls; one instance can serve any number of
/// concurrent requests.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::TravelTimeMatrix;
/// use route_optimizer::optimizer::RouteOptimizer;
///
/// let locations = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let tm = TravelTimeMatrix::from_rows(&[
///     vec![0.0, 1.0, 100.0],
///     vec![1.0, 0.0, 1.0],
///     vec![100.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let tour = RouteOptimizer::default().optimize(&locations, &tm).unwrap();
/// assert_eq!(tour.total_time(), 102.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Finds the optimal round trip, subject to the configured limits.
    ///
    /// # Errors
    ///
    /// Everything [`exact::optimize`] reports, plus [`Error::InvalidInput`]
    /// above `max_locations` and [`Error::Timeout`] when the time limit
    /// elapses first.
    pub fn optimize(&self, locations: &[String], times: &TravelTimeMatrix) -> Result<Tour> {
        let n = locations.len();
        if n > self.config.max_locations {
            return Err(Error::invalid_input(format!(
                "{n} locations exceeds the limit of {}",
                self.config.max_locations
            )));
        }
        debug!(
            "evaluating {} candidate tours over {n} locations",
            count_permutations(n.saturating_sub(1))
        );

        match self.config.time_limit() {
            None => exact::optimize(locations, times),
            Some(limit) => optimize_within(locations, times, limit),
        }
    }

    /// Fetches travel times for `locations` from `provider`, then optimizes.
    pub fn plan<P: TravelTimeProvider + ?Sized>(
        &self,
        provider: &P,
        locations: &[String],
    ) -> Result<Tour> {
        let times = provider.travel_times(locations)?;
        let tour = self.optimize(locations, &times)?;
        info!(
            "planned round trip over {} locations, total time {}",
            locations.len(),
            tour.total_time()
        );
        Ok(tour)
    }
}

/// Runs the search on a worker thread over owned copies of the input.
///
/// On timeout the worker is detached: it finishes in the background and its
/// result is dropped with the channel.
fn optimize_within(
    locations: &[String],
    times: &TravelTimeMatrix,
    limit: Duration,
) -> Result<Tour> {
    let (tx, rx) = mpsc::channel();
    let locations = locations.to_vec();
    let times = times.clone();

    thread::spawn(move || {
        let _ = tx.send(exact::optimize(&locations, &times));
    });

    match rx.recv_timeout(limit) {
        Ok(result) => result,
        Err(RecvTimeoutError::Timeout) => {
            warn!("route search abandoned after {limit:?}");
            Err(Error::Timeout(limit))
        }
        Err(RecvTimeoutError::Disconnected) => {
            Err(Error::other("route search stopped without a result"))
        }
    }
}
