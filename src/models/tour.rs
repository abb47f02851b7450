//! Tour and leg types.

use serde::{Deserialize, Serialize};

/// One visited location within a tour, with the time of the leg arriving at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Position of the location in the caller's location list.
    pub index: usize,
    /// Location identifier as supplied by the caller.
    pub location: String,
    /// Travel time of the incoming leg (0 for the starting origin).
    pub travel_time: f64,
}

/// A closed tour that starts and ends at the origin (index 0).
///
/// Legs are stored in visit order; the first leg is the origin with no
/// incoming time and the last leg is the return to the origin.
///
/// # Examples
///
/// ```
/// use route_optimizer::models::{Leg, Tour};
///
/// let mut tour = Tour::new();
/// tour.push_leg(Leg { index: 0, location: "A".into(), travel_time: 0.0 });
/// tour.push_leg(Leg { index: 1, location: "B".into(), travel_time: 10.0 });
/// tour.push_leg(Leg { index: 0, location: "A".into(), travel_time: 15.0 });
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.total_time(), 25.0);
/// assert_eq!(tour.order(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    legs: Vec<Leg>,
    total_time: f64,
}

impl Tour {
    /// Creates an empty tour.
    pub fn new() -> Self {
        Self {
            legs: Vec::new(),
            total_time: 0.0,
        }
    }

    /// Appends a leg and adds its travel time to the total.
    pub fn push_leg(&mut self, leg: Leg) {
        self.total_time += leg.travel_time;
        self.legs.push(leg);
    }

    /// Returns the legs in visit order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Consumes the tour, returning its legs.
    pub fn into_legs(self) -> Vec<Leg> {
        self.legs
    }

    /// Number of legs, including both origin entries.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Returns `true` if no leg has been pushed.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Sum of all leg travel times.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Full closed index sequence, origin first and last.
    pub fn indices(&self) -> Vec<usize> {
        self.legs.iter().map(|l| l.index).collect()
    }

    /// Interior visiting order (every index except the two origin entries).
    pub fn order(&self) -> Vec<usize> {
        if self.legs.len() < 2 {
            return Vec::new();
        }
        self.legs[1..self.legs.len() - 1]
            .iter()
            .map(|l| l.index)
            .collect()
    }
}

impl Default for Tour {
    fn default() -> Self {
        Self::new()
    }
}
