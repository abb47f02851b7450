//! Travel-time matrices and the provider seam that supplies them.
//!
//! Provides a dense directed matrix with an explicit unreachable marker.

mod matrix;
mod provider;

pub use matrix::{TravelTimeMatrix, UNREACHABLE};
pub use provider::TravelTimeProvider;
