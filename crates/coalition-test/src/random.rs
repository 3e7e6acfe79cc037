//! Seeded random rosters.

use coalition_core::{Dataset, Party};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates a roster of `party_count` parties from `seed`.
///
/// Seats are drawn from `0..=40`, so some parties may hold none; positions
/// are uniform over the square. The same seed always yields the same roster.
pub fn random_dataset(seed: u64, party_count: usize) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let parties = (0..party_count)
        .map(|i| {
            let seats = rng.random_range(0..=40u32);
            let economic = rng.random_range(-1.0..=1.0);
            let social = rng.random_range(-1.0..=1.0);
            Party::new(format!("P{:02}", i), seats).with_position(economic, social)
        })
        .collect();
    Dataset::new(format!("random-{}", seed), parties).expect("generated names are unique")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_roster() {
        assert_eq!(random_dataset(7, 9), random_dataset(7, 9));
    }

    #[test]
    fn test_positions_in_square() {
        let ds = random_dataset(11, 20);
        assert_eq!(ds.len(), 20);
        for p in ds.parties() {
            assert!((-1.0..=1.0).contains(&p.economic()));
            assert!((-1.0..=1.0).contains(&p.social()));
        }
    }
}
