use crate::cards::Rank;

/// A precedence fact: `upper` outranks `lower`.
///
/// Rules are directional and may be contradicted by later evidence;
/// the [`super::OrderGraph`] decides whether they are admitted.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rule {
    upper: Rank,
    lower: Rank,
}

impl Rule {
    pub fn upper(&self) -> Rank {
        self.upper
    }
    pub fn lower(&self) -> Rank {
        self.lower
    }
    pub fn reversed(&self) -> Self {
        Self {
            upper: self.lower,
            lower: self.upper,
        }
    }
}

/// (upper, lower). a rank never outranks itself.
impl From<(Rank, Rank)> for Rule {
    fn from((upper, lower): (Rank, Rank)) -> Self {
        assert!(upper != lower, "self-precedence {} > {}", upper, lower);
        Self { upper, lower }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} > {}", self.upper, self.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversal_swaps_sides() {
        let rule = Rule::from((Rank::Nine, Rank::King));
        assert!(rule.reversed().upper() == Rank::King);
        assert!(rule.reversed().lower() == Rank::Nine);
        assert!(rule.reversed().reversed() == rule);
    }

    #[test]
    #[should_panic]
    fn self_precedence_is_a_bug() {
        Rule::from((Rank::Ten, Rank::Ten));
    }
}
