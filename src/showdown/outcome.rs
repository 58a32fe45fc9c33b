use crate::Chips;

/// Who took the pot, from the hero's point of view.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Hero,
    Villain,
    Tie,
}

/// the sign of the hero's chip delta
impl From<Chips> for Outcome {
    fn from(delta: Chips) -> Self {
        match delta.signum() {
            1 => Self::Hero,
            -1 => Self::Villain,
            _ => Self::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Hero => write!(f, "hero wins"),
            Self::Villain => write!(f, "villain wins"),
            Self::Tie => write!(f, "tie"),
        }
    }
}
