use crate::Probability;
use crate::strength::PreflopTable;

/// The 1st through 99th percentiles of the preflop strength distribution.
///
/// Cut points interpolate linearly between order statistics, so the
/// k-th percentile of n sorted values sits at fractional index
/// k (n - 1) / 100.
#[derive(Debug, Clone, PartialEq)]
pub struct Percentiles([Probability; crate::PREFLOP_TIERS]);

impl From<Vec<Probability>> for Percentiles {
    fn from(mut strengths: Vec<Probability>) -> Self {
        assert!(!strengths.is_empty(), "percentiles of nothing");
        strengths.sort_by(|a, b| a.total_cmp(b));
        let last = (strengths.len() - 1) as f64;
        let mut cuts = [0.; crate::PREFLOP_TIERS];
        for (i, cut) in cuts.iter_mut().enumerate() {
            let index = (i + 1) as f64 * last / 100.;
            let lo = index.floor() as usize;
            let hi = index.ceil() as usize;
            let a = strengths[lo] as f64;
            let b = strengths[hi] as f64;
            *cut = (a + (b - a) * (index - lo as f64)) as Probability;
        }
        Self(cuts)
    }
}

impl From<&PreflopTable> for Percentiles {
    fn from(table: &PreflopTable) -> Self {
        Self::from(table.strengths())
    }
}

impl Percentiles {
    /// the k-th percentile, 1 ≤ k ≤ 99
    pub fn cut(&self, k: usize) -> Probability {
        self.0[k - 1]
    }
    /// preflop strength tier, 1 through 99
    pub fn tier(&self, strength: Probability) -> usize {
        super::bucket::tier(&self.0, strength).clamp(1, crate::PREFLOP_TIERS)
    }
}
