//! Brute-force round-trip optimization.
//!
//! # Algorithm
//!
//! Location 0 is fixed as the start and end of the tour. Every permutation
//! of the remaining indices `1..n` is enumerated in lexicographic order and
//! its full closed-tour cost computed:
//!
//! ```text
//! cost = t(0, p[0]) + t(p[0], p[1]) + ... + t(p[k-1], 0)
//! ```
//!
//! The first permutation reaching the minimum is kept; later permutations
//! with an equal cost never replace it. No pruning is performed.
//!
//! # Complexity
//!
//! O((n-1)! · n) time, O(n) working space. Exact, and only practical for
//! roughly n ≤ 10.

use crate::distance::TravelTimeMatrix;
use crate::error::{Error, Result};
use crate::evaluation::TourEvaluator;
use crate::models::Tour;

use super::next_permutation;

/// Finds the minimum-time closed tour that starts and ends at location 0 and
/// visits every other location exactly once.
///
/// Locations are identified by position: duplicate names at different
/// indices are distinct stops.
///
/// # Errors
///
/// * [`Error::InvalidInput`] — fewer than two locations, a matrix whose size
///   differs from the location count, or a negative/missing off-diagonal
///   travel time.
/// * [`Error::NoRouteFound`] — every tour uses an unreachable leg.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::TravelTimeMatrix;
/// use route_optimizer::exact::optimize;
///
/// let locations = vec!["A".to_string(), "B".to_string()];
/// let tm = TravelTimeMatrix::from_rows(&[vec![0.0, 10.0], vec![15.0, 0.0]]).unwrap();
///
/// let tour = optimize(&locations, &tm).unwrap();
/// assert_eq!(tour.indices(), vec![0, 1, 0]);
/// assert_eq!(tour.total_time(), 25.0);
/// ```
pub fn optimize(locations: &[String], times: &TravelTimeMatrix) -> Result<Tour> {
    let n = locations.len();
    if n < 2 {
        return Err(Error::invalid_input(format!(
            "at least two locations are required, got {n}"
        )));
    }
    if times.size() != n {
        return Err(Error::invalid_input(format!(
            "travel-time matrix is {0}x{0} but there are {n} locations",
            times.size()
        )));
    }
    times.validate()?;

    let evaluator = TourEvaluator::new(locations, times);
    let mut perm: Vec<usize> = (1..n).collect();
    let mut best: Option<(f64, Vec<usize>)> = None;

    loop {
        let cost = evaluator.cost(&perm);
        let improves = match &best {
            Some((best_cost, _)) => cost < *best_cost,
            None => cost.is_finite(),
        };
        if improves {
            best = Some((cost, perm.clone()));
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    let (_, order) = best.ok_or(Error::NoRouteFound)?;
    Ok(evaluator.build_tour(&order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::UNREACHABLE;
    use crate::exact::Permutations;

    fn names(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_locations() {
        let tm = TravelTimeMatrix::from_rows(&[vec![0.0, 10.0], vec![15.0, 0.0]]).expect("valid");
        let tour = optimize(&names(&["A", "B"]), &tm).expect("route");

        let legs: Vec<(&str, f64)> = tour
            .legs()
            .iter()
            .map(|l| (l.location.as_str(), l.travel_time))
            .collect();
        assert_eq!(legs, vec![("A", 0.0), ("B", 10.0), ("A", 15.0)]);
        assert_eq!(tour.total_time(), 25.0);
    }

    #[test]
    fn test_three_locations_tie_keeps_first() {
        let tm = TravelTimeMatrix::from_rows(&[
            vec![0.0, 1.0, 100.0],
            vec![1.0, 0.0, 1.0],
            vec![100.0, 1.0, 0.0],
        ])
        .expect("valid");
        let tour = optimize(&names(&["A", "B", "C"]), &tm).expect("route");
        // A→B→C→A and A→C→B→A both cost 102; (1, 2) comes first.
        assert_eq!(tour.indices(), vec![0, 1, 2, 0]);
        assert_eq!(tour.total_time(), 102.0);
    }

    #[test]
    fn test_asymmetric_picks_cheaper_direction() {
        let tm = TravelTimeMatrix::from_rows(&[
            vec![0.0, 5.0, 1.0],
            vec![1.0, 0.0, 5.0],
            vec![5.0, 1.0, 0.0],
        ])
        .expect("valid");
        let tour = optimize(&names(&["A", "B", "C"]), &tm).expect("route");
        assert_eq!(tour.order(), vec![2, 1]);
        assert_eq!(tour.total_time(), 3.0);
    }

    #[test]
    fn test_single_location_rejected() {
        let tm = TravelTimeMatrix::new(1);
        let err = optimize(&names(&["A"]), &tm).expect_err("too few");
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_size_mismatch_rejected() {
        let tm = TravelTimeMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).expect("valid");
        let err = optimize(&names(&["A", "B", "C"]), &tm).expect_err("mismatch");
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_negative_entry_rejected() {
        let mut tm = TravelTimeMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 0.0]]).expect("valid");
        tm.set(1, 0, -4.0);
        let err = optimize(&names(&["A", "B"]), &tm).expect_err("negative");
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_unreachable_return_means_no_route() {
        let mut tm = TravelTimeMatrix::from_rows(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .expect("valid");
        // Nothing can get back to the origin.
        tm.set(1, 0, UNREACHABLE);
        tm.set(2, 0, UNREACHABLE);
        let err = optimize(&names(&["A", "B", "C"]), &tm).expect_err("disconnected");
        assert_eq!(err, Error::NoRouteFound);
    }

    #[test]
    fn test_unreachable_leg_is_routed_around() {
        let mut tm = TravelTimeMatrix::from_rows(&[
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .expect("valid");
        tm.set(1, 2, UNREACHABLE);
        let tour = optimize(&names(&["A", "B", "C"]), &tm).expect("route");
        assert_eq!(tour.order(), vec![2, 1]);
    }

    #[test]
    fn test_duplicate_names_are_distinct_stops() {
        let tm = TravelTimeMatrix::from_rows(&[
            vec![0.0, 2.0, 3.0],
            vec![2.0, 0.0, 4.0],
            vec![3.0, 4.0, 0.0],
        ])
        .expect("valid");
        let tour = optimize(&names(&["home", "shop", "shop"]), &tm).expect("route");
        assert_eq!(tour.len(), 4);
        assert_eq!(tour.order().len(), 2);
        assert!(tour.order().contains(&1));
        assert!(tour.order().contains(&2));
    }

    #[test]
    fn test_diagonal_is_ignored() {
        let tm = TravelTimeMatrix::from_rows(&[
            vec![UNREACHABLE, 4.0, 2.0],
            vec![3.0, f64::NAN, 1.0],
            vec![5.0, 6.0, -1.0],
        ])
        .expect("diagonal not validated");
        let tour = optimize(&names(&["A", "B", "C"]), &tm).expect("route");
        // [1, 2]: 4 + 1 + 5 = 10, [2, 1]: 2 + 6 + 3 = 11
        assert_eq!(tour.order(), vec![1, 2]);
        assert_eq!(tour.total_time(), 10.0);
    }

    #[test]
    fn test_matches_exhaustive_minimum() {
        let rows = vec![
            vec![0.0, 12.0, 7.0, 30.0, 4.0],
            vec![9.0, 0.0, 3.0, 8.0, 15.0],
            vec![14.0, 6.0, 0.0, 2.0, 11.0],
            vec![5.0, 13.0, 10.0, 0.0, 1.0],
            vec![8.0, 2.0, 16.0, 7.0, 0.0],
        ];
        let tm = TravelTimeMatrix::from_rows(&rows).expect("valid");
        let locations = names(&["A", "B", "C", "D", "E"]);
        let tour = optimize(&locations, &tm).expect("route");

        let evaluator = TourEvaluator::new(&locations, &tm);
        let min = Permutations::new(vec![1, 2, 3, 4])
            .map(|p| evaluator.cost(&p))
            .fold(f64::INFINITY, f64::min);
        assert!((tour.total_time() - min).abs() < 1e-10);
    }
}
