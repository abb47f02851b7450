//! Domain model types for round-trip routing.
//!
//! A [`Tour`] is the result of optimization: the closed visiting sequence
//! from the origin back to the origin, one [`Leg`] per visited location.

mod tour;

pub use tour::{Leg, Tour};
