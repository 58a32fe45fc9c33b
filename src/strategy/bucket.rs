use super::percentile::Percentiles;
use crate::Probability;
use crate::Utility;
use crate::cards::Street;

/// number of ascending cutoffs at or below the value
pub fn tier(cutoffs: &[f32], value: f32) -> usize {
    cutoffs.iter().filter(|cutoff| **cutoff <= value).count()
}

/// Index of a discretized decision state into the precomputed tables.
///
/// `40000 button + 10000 street + 1000 continue + 100 pot + strength`.
/// The encoding is fixed by the tables and must not change.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bucket(usize);

impl Bucket {
    /// one past the largest id: button 1, river, every tier maxed
    pub const COUNT: usize = 40_000 + 30_000 + 9_000 + 900 + 19 + 1;
}

impl From<usize> for Bucket {
    fn from(id: usize) -> Self {
        assert!(id < Self::COUNT, "bucket {} out of range", id);
        Self(id)
    }
}
impl From<Bucket> for usize {
    fn from(bucket: Bucket) -> usize {
        bucket.0
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "B{:05}", self.0)
    }
}

/// Maps game states to buckets. Preflop strengths are tiered by the
/// percentiles of the preflop table, postflop strengths by fixed cutoffs.
#[derive(Debug, Clone)]
pub struct Bucketer(Percentiles);

impl From<Percentiles> for Bucketer {
    fn from(percentiles: Percentiles) -> Self {
        Self(percentiles)
    }
}

impl Bucketer {
    pub fn get_bucket(
        &self,
        button: usize,
        continue_cost: Utility,
        pot_after_continue: Utility,
        street: Street,
        strength: Probability,
    ) -> Bucket {
        assert!(button < 2, "button is 0 or 1, not {}", button);
        let strength = match street {
            Street::Pref => self.0.tier(strength),
            _ => tier(&crate::STRENGTH_CUTOFFS, strength),
        };
        Bucket(
            40_000 * button
                + 10_000 * street.index() as usize
                + 1_000 * tier(&crate::CONTINUE_CUTOFFS, continue_cost)
                + 100 * tier(&crate::POT_CUTOFFS, pot_after_continue)
                + strength,
        )
    }
}
