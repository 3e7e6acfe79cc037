//! Exhaustive k-combination enumeration.

use coalition_core::Dataset;
use smallvec::SmallVec;

use super::Subset;
use crate::range::SizeRange;

/// Every subset of seat-holding parties with size in the range.
///
/// Subsets come out by size ascending, then in lexicographic order of
/// roster indices.
///
/// # Examples
///
/// ```
/// use coalition_core::{Dataset, Party};
/// use coalition_solver::{Combinations, SizeRange};
///
/// let ds = Dataset::new("d", vec![
///     Party::new("A", 1),
///     Party::new("B", 0),
///     Party::new("C", 1),
///     Party::new("D", 1),
/// ]).unwrap();
///
/// let subsets: Vec<Vec<usize>> = Combinations::new(&ds, SizeRange::new(2, 3).unwrap())
///     .map(|s| s.to_vec())
///     .collect();
/// assert_eq!(subsets, vec![vec![0, 2], vec![0, 3], vec![2, 3], vec![0, 2, 3]]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    pool: Vec<usize>,
    min: usize,
    max: usize,
    size: usize,
    positions: SmallVec<[usize; 8]>,
    started: bool,
}

impl Combinations {
    pub fn new(dataset: &Dataset, range: SizeRange) -> Self {
        Self::over(dataset.eligible_indices(), range)
    }

    /// Enumerates subsets of an explicit pool of roster indices.
    pub fn over(pool: Vec<usize>, range: SizeRange) -> Self {
        let max = range.max().min(pool.len());
        Self {
            pool,
            min: range.min(),
            max,
            size: range.min(),
            positions: SmallVec::new(),
            started: false,
        }
    }

    /// Starts over from the first subset.
    pub fn reset(&mut self) {
        self.size = self.min;
        self.positions.clear();
        self.started = false;
    }

    fn current(&self) -> Subset {
        self.positions.iter().map(|&p| self.pool[p]).collect()
    }

    /// Moves to the next combination of the current size.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.positions.len();
        for i in (0..k).rev() {
            if self.positions[i] < n - k + i {
                self.positions[i] += 1;
                for j in i + 1..k {
                    self.positions[j] = self.positions[j - 1] + 1;
                }
                return true;
            }
        }
        false
    }
}

impl Iterator for Combinations {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        while self.size <= self.max {
            if !self.started {
                self.positions = (0..self.size).collect();
                self.started = true;
                return Some(self.current());
            }
            if self.advance() {
                return Some(self.current());
            }
            self.size += 1;
            self.started = false;
        }
        None
    }
}

impl std::iter::FusedIterator for Combinations {}
