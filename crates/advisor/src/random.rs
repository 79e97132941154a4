use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the random choices made when picking flavor text.
pub trait RandomSource {
    /// Returns an index in `0..len`. `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by the standard seedable generator.
#[derive(Debug, Clone)]
pub struct StdRandom(StdRng);

impl StdRandom {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }

    /// Seeded when a seed is configured, from entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

pub(crate) fn pick<'a>(rng: &mut dyn RandomSource, pool: &[&'a str]) -> &'a str {
    pool[rng.index(pool.len()) % pool.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = StdRandom::seeded(42);
        let mut b = StdRandom::seeded(42);
        let first: Vec<usize> = (0..16).map(|_| a.index(5)).collect();
        let second: Vec<usize> = (0..16).map(|_| b.index(5)).collect();

        assert_eq!(first, second);
        assert!(first.iter().all(|i| *i < 5));
    }

    #[test]
    fn pick_wraps_out_of_range_indices() {
        struct Wild;
        impl RandomSource for Wild {
            fn index(&mut self, _len: usize) -> usize {
                7
            }
        }

        assert_eq!(pick(&mut Wild, &["a", "b", "c"]), "b");
    }
}
