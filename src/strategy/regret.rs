use crate::Probability;
use crate::Utility;
use crate::action::Choice;
use crate::N_ACTIONS;

/// A distribution over the four abstract actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy([Probability; N_ACTIONS]);

impl Policy {
    pub fn uniform() -> Self {
        Self([1. / N_ACTIONS as Probability; N_ACTIONS])
    }
    pub fn weights(&self) -> &[Probability; N_ACTIONS] {
        &self.0
    }
    /// inverse CDF: the first action whose cumulative weight exceeds `r`.
    /// rounding that leaves `r` past the total falls to the last action.
    pub fn sample(&self, r: Probability) -> Choice {
        let mut total = 0.;
        for (i, weight) in self.0.iter().enumerate() {
            total += weight;
            if r < total {
                return Choice::from(i);
            }
        }
        Choice::from(N_ACTIONS - 1)
    }
}

/// regret matching: negative entries are clipped to zero and the rest
/// normalized. nothing positive means uniform.
pub fn calculate_strategy(row: &[Utility; N_ACTIONS]) -> Policy {
    let clipped = row.map(|r| r.max(0.));
    let sum = clipped.iter().sum::<Utility>();
    if sum == 0. {
        Policy::uniform()
    } else {
        Policy(clipped.map(|r| r / sum))
    }
}
