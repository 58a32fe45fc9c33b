use crate::Chips;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Hole;
use crate::cards::Street;
use crate::strategy::Phase;
use crate::strength::Reading;
use crate::strength::StrengthCache;

/// State that lives for exactly one round.
#[derive(Debug)]
pub struct RoundContext {
    pub(super) hole: Hole,
    pub(super) board: Board,
    pub(super) street: Street,
    pub(super) cache: StrengthCache,
    pub(super) reading: Reading,
    pub(super) faced: [bool; 2],
}

impl RoundContext {
    pub(super) fn new(hole: Hole, reading: Reading) -> Self {
        Self {
            hole,
            board: Board::new(),
            street: Street::Pref,
            cache: StrengthCache::default(),
            reading,
            faced: [false; 2],
        }
    }

    pub fn hole(&self) -> &Hole {
        &self.hole
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn reading(&self) -> Reading {
        self.reading
    }
    /// whether the shove gate fired in this phase
    pub fn faced(&self, phase: Phase) -> bool {
        self.faced[phase as usize]
    }
    pub fn cache(&self) -> &StrengthCache {
        &self.cache
    }
}

/// What the host reveals when a round is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundEnd {
    /// the board as dealt, up to five cards
    pub board: Vec<Card>,
    /// None when the villain mucked or folded
    pub villain: Option<Hole>,
    /// our signed chip result for the round
    pub delta: Chips,
    /// our running total after this round
    pub bankroll: Chips,
    /// counts from 1
    pub round_num: u32,
}
