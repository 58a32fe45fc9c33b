/// What happened to a batch of precedence rules.
///
/// "nothing to learn" and "contradicted what we know" are different
/// outcomes and callers log them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// no rules were proposed
    Abstained,
    /// the batch is consistent; `added` counts edges not already implied
    Accepted { added: usize },
    /// the batch closed a cycle and was rolled back entirely
    Rejected,
}

impl Verdict {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Abstained => write!(f, "abstained"),
            Self::Accepted { added } => write!(f, "accepted (+{} edges)", added),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}
