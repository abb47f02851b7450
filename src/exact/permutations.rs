//! Lexicographic permutation enumeration.
//!
//! # Algorithm
//!
//! Starting from the sorted sequence, each step finds the longest
//! non-increasing suffix, swaps its predecessor with the smallest larger
//! element of the suffix, then reverses the suffix. This yields every
//! permutation exactly once in lexicographic order.
//!
//! # Reference
//!
//! Knuth, D.E. *The Art of Computer Programming*, Vol. 4A, §7.2.1.2,
//! Algorithm L.

/// Rearranges `seq` into its lexicographic successor.
///
/// Returns `false`, leaving `seq` untouched, when `seq` is already the last
/// permutation (non-increasing).
///
/// # Examples
///
/// ```
/// use route_optimizer::exact::next_permutation;
///
/// let mut seq = vec![1, 3, 2];
/// assert!(next_permutation(&mut seq));
/// assert_eq!(seq, vec![2, 1, 3]);
///
/// let mut last = vec![3, 2, 1];
/// assert!(!next_permutation(&mut last));
/// ```
pub fn next_permutation(seq: &mut [usize]) -> bool {
    let n = seq.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = n - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}

/// Iterator over every permutation of a set of indices, in lexicographic
/// order.
///
/// The empty set has exactly one permutation, the empty one.
///
/// # Examples
///
/// ```
/// use route_optimizer::exact::Permutations;
///
/// let all: Vec<Vec<usize>> = Permutations::new(vec![2, 1]).collect();
/// assert_eq!(all, vec![vec![1, 2], vec![2, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    exhausted: bool,
}

impl Permutations {
    /// Creates the enumerator; `items` are sorted first so enumeration
    /// starts at the smallest permutation.
    pub fn new(mut items: Vec<usize>) -> Self {
        items.sort_unstable();
        Self {
            current: items,
            exhausted: false,
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let out = self.current.clone();
        if !next_permutation(&mut self.current) {
            self.exhausted = true;
        }
        Some(out)
    }
}

/// Number of permutations of `k` distinct items, saturating at `u64::MAX`.
pub fn count_permutations(k: usize) -> u64 {
    (1..=k as u64).fold(1u64, |acc, x| acc.saturating_mul(x))
}
