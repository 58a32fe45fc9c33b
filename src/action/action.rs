use crate::Chips;

/// A concrete action for the host. Raise amounts are total commitments
/// for this betting round, as the host's raise bounds are.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Raise(Chips),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Check => write!(f, "CHECK"),
            Self::Call => write!(f, "CALL"),
            Self::Raise(amount) => write!(f, "RAISE {}", amount),
        }
    }
}

/// Smallest and largest legal raise commitment.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct RaiseBounds {
    pub min: Chips,
    pub max: Chips,
}

impl From<(Chips, Chips)> for RaiseBounds {
    fn from((min, max): (Chips, Chips)) -> Self {
        Self { min, max }
    }
}

impl RaiseBounds {
    /// raise to min, then cap at max. an empty range resolves to max.
    pub fn clamp(&self, amount: Chips) -> Chips {
        amount.max(self.min).min(self.max)
    }
}

/// The action kinds the host offers. Raising is legal exactly when
/// bounds are given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Legal {
    pub fold: bool,
    pub check: bool,
    pub call: bool,
    pub raise: Option<RaiseBounds>,
}

impl Legal {
    pub fn len(&self) -> usize {
        [self.fold, self.check, self.call, self.raise.is_some()]
            .into_iter()
            .filter(|offered| *offered)
            .count()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn permits(&self, action: &Action) -> bool {
        match action {
            Action::Fold => self.fold,
            Action::Check => self.check,
            Action::Call => self.call,
            Action::Raise(amount) => self
                .raise
                .is_some_and(|b| (b.min..=b.max).contains(amount)),
        }
    }
    /// what a player locked into passivity does
    pub fn passive(&self) -> Action {
        match self.check {
            true => Action::Check,
            false => Action::Fold,
        }
    }
}
