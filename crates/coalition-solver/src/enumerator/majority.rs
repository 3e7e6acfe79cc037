//! Branch-and-bound enumeration of majority subsets.
//!
//! The search walks the seat-holding parties sorted by seats descending.
//! A branch is a partial subset plus a cursor into that order. Its
//! optimistic bound is the running seat sum plus the largest seat counts
//! still reachable: the next `max - len` parties from the cursor. When the
//! bound misses the majority threshold the branch is abandoned.

use std::cmp::Reverse;

use coalition_core::Dataset;
use smallvec::SmallVec;

use super::Subset;
use crate::range::SizeRange;

/// Lazily yields every subset whose seats reach a majority.
///
/// Each subset comes out once, as roster indices ascending. Sizes stay
/// within the range, with the maximum capped at the number of seat-holding
/// parties.
///
/// # Examples
///
/// ```
/// use coalition_core::{Dataset, Party};
/// use coalition_solver::{MajorityBoundSearch, SizeRange};
///
/// let ds = Dataset::new("s", vec![
///     Party::new("A", 50),
///     Party::new("B", 40),
///     Party::new("C", 60),
/// ]).unwrap();
///
/// let found: Vec<Vec<usize>> = MajorityBoundSearch::new(&ds, SizeRange::new(1, 3).unwrap())
///     .map(|s| s.to_vec())
///     .collect();
/// assert_eq!(found, vec![vec![0, 2], vec![0, 1, 2], vec![1, 2], vec![0, 1]]);
/// ```
#[derive(Debug, Clone)]
pub struct MajorityBoundSearch {
    /// Roster indices, seats descending.
    order: Vec<usize>,
    /// Seats of `order[k]`.
    seats: Vec<u64>,
    /// `prefix[k]` is the seat total of `order[..k]`.
    prefix: Vec<u64>,
    threshold: u64,
    min: usize,
    max: usize,
    /// Positions into `order` of the current partial subset.
    chosen: SmallVec<[usize; 8]>,
    sum: u64,
    cursor: usize,
    done: bool,
    pruned: u64,
}

impl MajorityBoundSearch {
    pub fn new(dataset: &Dataset, range: SizeRange) -> Self {
        let parties = dataset.parties();
        let mut order = dataset.eligible_indices();
        order.sort_by_key(|&i| (Reverse(parties[i].seats()), i));

        let seats: Vec<u64> = order
            .iter()
            .map(|&i| u64::from(parties[i].seats()))
            .collect();
        let mut prefix = Vec::with_capacity(seats.len() + 1);
        prefix.push(0);
        for s in &seats {
            prefix.push(prefix[prefix.len() - 1] + s);
        }

        let max = range.max().min(order.len());
        Self {
            order,
            seats,
            prefix,
            threshold: dataset.majority_threshold(),
            min: range.min(),
            max,
            chosen: SmallVec::new(),
            sum: 0,
            cursor: 0,
            done: false,
            pruned: 0,
        }
    }

    /// Branches abandoned so far.
    #[inline]
    pub fn pruned(&self) -> u64 {
        self.pruned
    }

    /// Starts over from the empty subset.
    pub fn reset(&mut self) {
        self.chosen.clear();
        self.sum = 0;
        self.cursor = 0;
        self.done = false;
        self.pruned = 0;
    }

    /// Best seat total reachable from the current branch.
    fn optimistic_bound(&self) -> u64 {
        let picks = self.max - self.chosen.len();
        let end = (self.cursor + picks).min(self.order.len());
        self.sum + self.prefix[end] - self.prefix[self.cursor]
    }

    /// Whether the current branch can still produce a subset in range.
    fn can_extend(&self) -> bool {
        let n = self.order.len();
        self.cursor < n
            && self.chosen.len() < self.max
            && self.chosen.len() + (n - self.cursor) >= self.min
    }

    /// Drops the last chosen party and moves past it. Returns false when
    /// the search is exhausted.
    fn backtrack(&mut self) -> bool {
        match self.chosen.pop() {
            Some(k) => {
                self.sum -= self.seats[k];
                self.cursor = k + 1;
                true
            }
            None => false,
        }
    }

    fn current(&self) -> Subset {
        let mut subset: Subset = self.chosen.iter().map(|&k| self.order[k]).collect();
        subset.sort_unstable();
        subset
    }
}

impl Iterator for MajorityBoundSearch {
    type Item = Subset;

    fn next(&mut self) -> Option<Subset> {
        while !self.done {
            if !self.can_extend() {
                if !self.backtrack() {
                    self.done = true;
                }
                continue;
            }
            if self.optimistic_bound() < self.threshold {
                self.pruned += 1;
                if !self.backtrack() {
                    self.done = true;
                }
                continue;
            }

            let k = self.cursor;
            self.chosen.push(k);
            self.sum += self.seats[k];
            self.cursor = k + 1;

            if self.chosen.len() >= self.min && self.sum >= self.threshold {
                return Some(self.current());
            }
        }
        None
    }
}

impl std::iter::FusedIterator for MajorityBoundSearch {}
