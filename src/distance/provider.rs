//! Source of travel times for a set of locations.

use super::TravelTimeMatrix;
use crate::error::Result;

/// Supplies pairwise travel times for a list of locations.
///
/// Implementations must return a square matrix aligned index-for-index with
/// `locations`, in one consistent time unit, using
/// [`UNREACHABLE`](super::UNREACHABLE) for legs that cannot be travelled.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::{TravelTimeMatrix, TravelTimeProvider};
/// use route_optimizer::error::Result;
///
/// struct UnitProvider;
///
/// impl TravelTimeProvider for UnitProvider {
///     fn travel_times(&self, locations: &[String]) -> Result<TravelTimeMatrix> {
///         let n = locations.len();
///         let mut tm = TravelTimeMatrix::new(n);
///         for i in 0..n {
///             for j in 0..n {
///                 if i != j {
///                     tm.set(i, j, 1.0);
///                 }
///             }
///         }
///         Ok(tm)
///     }
/// }
///
/// let locations = vec!["a".to_string(), "b".to_string()];
/// let tm = UnitProvider.travel_times(&locations)?;
/// assert_eq!(tm.size(), 2);
/// # Ok::<(), route_optimizer::error::Error>(())
/// ```
pub trait TravelTimeProvider {
    /// Returns the travel-time matrix for `locations`.
    fn travel_times(&self, locations: &[String]) -> Result<TravelTimeMatrix>;
}
