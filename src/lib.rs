//! # route-optimizer
//!
//! Exact round-trip route optimization: given a small set of locations and
//! the directed travel times between them, find the visiting order that
//! leaves location 0, visits every other location once and returns in the
//! least total time.
//!
//! ## Modules
//!
//! - [`models`] — Result types (Tour, Leg)
//! - [`distance`] — Travel-time matrix and the provider trait that fills it
//! - [`evaluation`] — Cost of a visiting order, tour reconstruction
//! - [`exact`] — Brute-force search over every permutation
//! - [`optimizer`] — Size ceiling and time limit around the exact search
//! - [`request`] — JSON request/response bodies

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod models;
pub mod optimizer;
pub mod request;

pub use error::{Error, Result};
pub use exact::optimize;
