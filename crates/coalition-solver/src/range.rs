//! Party-count bounds.

use coalition_core::{CoalitionError, Result};

/// Inclusive bounds on coalition size.
///
/// # Examples
///
/// ```
/// use coalition_solver::SizeRange;
///
/// let range = SizeRange::new(2, 4).unwrap();
/// assert!(range.contains(3));
/// assert!(!range.contains(5));
///
/// assert!(SizeRange::new(3, 2).is_err());
/// assert!(SizeRange::new(0, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    min: usize,
    max: usize,
}

impl SizeRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// [`CoalitionError::InvalidRange`] if `min` is zero or exceeds `max`.
    /// Swapping or clamping is left to the caller.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 || min > max {
            return Err(CoalitionError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> usize {
        self.min
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn contains(&self, size: usize) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

/// Number of subsets of `n` items whose size lies in `range`.
///
/// Saturates at `u128::MAX`.
///
/// # Examples
///
/// ```
/// use coalition_solver::{combination_count, SizeRange};
///
/// // C(5,2) + C(5,3)
/// assert_eq!(combination_count(5, SizeRange::new(2, 3).unwrap()), 20);
/// assert_eq!(combination_count(3, SizeRange::new(4, 6).unwrap()), 0);
/// ```
pub fn combination_count(n: usize, range: SizeRange) -> u128 {
    let max = range.max.min(n);
    (range.min..=max).fold(0u128, |acc, k| acc.saturating_add(binomial(n, k)))
}

fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k {
        // exact at every step: result * (n - i) is divisible by (i + 1)
        result = match result.checked_mul((n - i) as u128) {
            Some(v) => v / (i as u128 + 1),
            None => return u128::MAX,
        };
    }
    result
}
