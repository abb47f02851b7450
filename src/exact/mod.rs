//! Exact search over every visiting order.
//!
//! - [`optimize`] — Brute-force round trip from location 0, O((n-1)! · n)
//! - [`Permutations`] — Lexicographic permutation enumerator

mod brute_force;
mod permutations;

pub use brute_force::optimize;
pub use permutations::{count_permutations, next_permutation, Permutations};
