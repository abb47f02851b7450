//! Cost evaluation of visiting orders.

mod evaluator;

pub use evaluator::{tour_cost, TourEvaluator};
