//! Tour evaluator that computes visiting cost and per-leg travel times.

use crate::distance::TravelTimeMatrix;
use crate::models::{Leg, Tour};

/// Evaluates visiting orders against a travel-time matrix.
///
/// An order lists the locations visited between leaving the origin and
/// returning to it; the origin itself is never part of the order.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::TravelTimeMatrix;
/// use route_optimizer::evaluation::TourEvaluator;
///
/// let locations = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let tm = TravelTimeMatrix::from_rows(&[
///     vec![0.0, 1.0, 100.0],
///     vec![1.0, 0.0, 1.0],
///     vec![100.0, 1.0, 0.0],
/// ])
/// .unwrap();
///
/// let evaluator = TourEvaluator::new(&locations, &tm);
/// assert_eq!(evaluator.cost(&[1, 2]), 102.0);
///
/// let tour = evaluator.build_tour(&[1, 2]);
/// assert_eq!(tour.indices(), vec![0, 1, 2, 0]);
/// ```
pub struct TourEvaluator<'a> {
    locations: &'a [String],
    times: &'a TravelTimeMatrix,
    origin: usize,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator anchored at location 0.
    pub fn new(locations: &'a [String], times: &'a TravelTimeMatrix) -> Self {
        Self {
            locations,
            times,
            origin: 0,
        }
    }

    /// Index of the location every tour starts and ends at.
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Total travel time of `origin → order[0] → ... → order[n-1] → origin`.
    ///
    /// Unreachable legs make the result infinite.
    pub fn cost(&self, order: &[usize]) -> f64 {
        tour_cost(order, self.origin, self.times)
    }

    /// Builds the closed tour for `order`, annotating each leg with its
    /// incoming travel time.
    pub fn build_tour(&self, order: &[usize]) -> Tour {
        let mut tour = Tour::new();
        tour.push_leg(self.leg(self.origin, 0.0));

        let mut prev = self.origin;
        for &idx in order {
            tour.push_leg(self.leg(idx, self.times.get(prev, idx)));
            prev = idx;
        }

        tour.push_leg(self.leg(self.origin, self.times.get(prev, self.origin)));
        tour
    }

    fn leg(&self, index: usize, travel_time: f64) -> Leg {
        Leg {
            index,
            location: self.locations[index].clone(),
            travel_time,
        }
    }
}

/// Computes the total travel time of `origin → order... → origin`.
///
/// An empty order stays at the origin and costs nothing.
pub fn tour_cost(order: &[usize], origin: usize, times: &TravelTimeMatrix) -> f64 {
    if order.is_empty() {
        return 0.0;
    }
    let mut total = 0.0;
    let mut prev = origin;
    for &idx in order {
        total += times.get(prev, idx);
        prev = idx;
    }
    total + times.get(prev, origin)
}
