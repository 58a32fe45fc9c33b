use crate::Utility;

/// The four abstract actions indexing every table row.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    /// check, or fold when checking is not offered
    CheckFold = 0,
    /// check, or call
    CheckCall = 1,
    /// value bet around three quarters of the pot
    BetSmall = 2,
    /// value bet or bluff around one and a quarter pots
    BetLarge = 3,
}

impl Choice {
    pub const fn all() -> [Self; crate::N_ACTIONS] {
        [Self::CheckFold, Self::CheckCall, Self::BetSmall, Self::BetLarge]
    }
    /// mean pot fraction for betting choices
    pub const fn fraction(&self) -> Option<Utility> {
        match self {
            Self::BetSmall => Some(crate::SMALL_BET),
            Self::BetLarge => Some(crate::LARGE_BET),
            _ => None,
        }
    }
}

/// table column isomorphism
impl From<usize> for Choice {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::CheckFold,
            1 => Self::CheckCall,
            2 => Self::BetSmall,
            3 => Self::BetLarge,
            _ => panic!("no abstract action {}", n),
        }
    }
}
impl From<Choice> for usize {
    fn from(choice: Choice) -> usize {
        choice as usize
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::CheckFold => write!(f, "check/fold"),
            Self::CheckCall => write!(f, "check/call"),
            Self::BetSmall => write!(f, "bet small"),
            Self::BetLarge => write!(f, "bet large"),
        }
    }
}

impl crate::Arbitrary for Choice {
    fn random() -> Self {
        use rand::Rng;
        Self::from(rand::rng().random_range(0..crate::N_ACTIONS))
    }
}
