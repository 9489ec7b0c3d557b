//! Random die rolling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{FACES, Pip, Triplet};

/// Produces uniformly random dice from an owned RNG.
#[derive(Debug, Clone)]
pub struct DieRoller {
    rng: StdRng,
}

impl DieRoller {
    /// A roller seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A reproducible roller for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Roll one die, uniform over 1-6.
    pub fn roll_one(&mut self) -> Pip {
        Pip(self.rng.random_range(1..=FACES))
    }

    /// Roll three independent dice. Values may repeat and are not sorted.
    pub fn roll_triplet(&mut self) -> Triplet {
        Triplet::new([self.roll_one(), self.roll_one(), self.roll_one()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_one_stays_in_bounds() {
        let mut roller = DieRoller::from_seed(42);
        for _ in 0..1000 {
            let pip = roller.roll_one();
            assert!((1..=6).contains(&pip.value()));
        }
    }

    #[test]
    fn roll_one_is_roughly_uniform() {
        let mut roller = DieRoller::from_seed(7);
        let mut counts = [0u32; 6];
        for _ in 0..6000 {
            counts[usize::from(roller.roll_one().value() - 1)] += 1;
        }
        // Expected 1000 per face, sd about 29; 150 is over five sd.
        for (face, &count) in counts.iter().enumerate() {
            assert!(
                (850..=1150).contains(&count),
                "face {} came up {count} times",
                face + 1
            );
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let mut r1 = DieRoller::from_seed(99);
        let mut r2 = DieRoller::from_seed(99);
        for _ in 0..20 {
            assert_eq!(r1.roll_triplet(), r2.roll_triplet());
        }
    }

    #[test]
    fn os_roller_rolls_valid_triplets() {
        let mut roller = DieRoller::from_os_rng();
        for _ in 0..100 {
            for pip in roller.roll_triplet().dice() {
                assert!((1..=6).contains(&pip.value()));
            }
        }
    }

    #[test]
    fn triplet_repeats_are_possible() {
        let mut roller = DieRoller::from_seed(3);
        let any_repeat = (0..500).any(|_| {
            let [a, b, c] = roller.roll_triplet().dice();
            a == b || b == c || a == c
        });
        assert!(any_repeat);
    }
}
