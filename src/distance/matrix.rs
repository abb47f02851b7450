//! Dense travel-time matrix.

use crate::error::{Error, Result};

/// Marker for a leg that cannot be travelled.
///
/// Kept distinct from `0.0` so a provider can report "no connection" without
/// it being mistaken for an instantaneous hop.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// A dense n×n directed travel-time matrix stored in row-major order.
///
/// Entry `(i, j)` is the travel time from location `i` to location `j`. The
/// matrix is not assumed symmetric. Diagonal entries are never read by the
/// optimizer and are therefore not validated.
///
/// # Examples
///
/// ```
/// use route_optimizer::distance::{TravelTimeMatrix, UNREACHABLE};
///
/// let tm = TravelTimeMatrix::from_rows(&[
///     vec![0.0, 10.0],
///     vec![15.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(tm.size(), 2);
/// assert_eq!(tm.get(1, 0), 15.0);
/// assert!(tm.get(0, 1) < UNREACHABLE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TravelTimeMatrix {
    data: Vec<f64>,
    size: usize,
}

impl TravelTimeMatrix {
    /// Creates a matrix of the given size with every off-diagonal leg
    /// unreachable and a zero diagonal.
    pub fn new(size: usize) -> Self {
        let mut data = vec![UNREACHABLE; size * size];
        for i in 0..size {
            data[i * size + i] = 0.0;
        }
        Self { data, size }
    }

    /// Creates a matrix from an explicit row-major grid.
    ///
    /// Fails if the data length doesn't match `size * size` or if an
    /// off-diagonal entry is negative or `NaN`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(Error::invalid_input(format!(
                "expected {} travel times for {size} locations, got {}",
                size * size,
                data.len()
            )));
        }
        let tm = Self { data, size };
        tm.validate()?;
        Ok(tm)
    }

    /// Creates a matrix from a square list of rows.
    ///
    /// ```
    /// use route_optimizer::distance::TravelTimeMatrix;
    ///
    /// let ragged = TravelTimeMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0]]);
    /// assert!(ragged.is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            check_row_len(i, row.len(), size)?;
            data.extend_from_slice(row);
        }
        Self::from_data(size, data)
    }

    /// Creates a matrix from rows where `None` marks an unreachable leg.
    ///
    /// This is the shape travel times arrive in over JSON, which has no
    /// literal for infinity.
    pub fn from_optional_rows(rows: &[Vec<Option<f64>>]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            check_row_len(i, row.len(), size)?;
            data.extend(row.iter().map(|v| v.unwrap_or(UNREACHABLE)));
        }
        Self::from_data(size, data)
    }

    /// Checks that every off-diagonal entry is a non-negative time or
    /// [`UNREACHABLE`].
    pub fn validate(&self) -> Result<()> {
        for from in 0..self.size {
            for to in 0..self.size {
                if from == to {
                    continue;
                }
                let t = self.get(from, to);
                if t.is_nan() {
                    return Err(Error::invalid_input(format!(
                        "missing travel time from {from} to {to}"
                    )));
                }
                if t < 0.0 {
                    return Err(Error::invalid_input(format!(
                        "negative travel time {t} from {from} to {to}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the travel time from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the travel time from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, time: f64) {
        self.data[from * self.size + to] = time;
    }

    /// Returns `true` if the directed leg `from → to` has a finite time.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the off-diagonal entries are symmetric within the
    /// given tolerance. Two unreachable entries count as equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

fn check_row_len(row: usize, len: usize, size: usize) -> Result<()> {
    if len != size {
        return Err(Error::invalid_input(format!(
            "row {row} has {len} entries, expected {size}"
        )));
    }
    Ok(())
}
