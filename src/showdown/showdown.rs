use super::outcome::Outcome;
use crate::cards::Board;
use crate::cards::Hole;

/// End-of-round evidence. The villain's hole is only known when the
/// round reached a showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown {
    hero: Hole,
    villain: Option<Hole>,
    board: Board,
    outcome: Outcome,
}

impl Showdown {
    pub fn new(hero: Hole, villain: Option<Hole>, board: Board, outcome: Outcome) -> Self {
        Self {
            hero,
            villain,
            board,
            outcome,
        }
    }
    pub fn hero(&self) -> &Hole {
        &self.hero
    }
    pub fn villain(&self) -> Option<&Hole> {
        self.villain.as_ref()
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    /// (winner, loser), or None on a tie or a mucked villain
    pub fn ranked(&self) -> Option<(&Hole, &Hole)> {
        let villain = self.villain.as_ref()?;
        match self.outcome {
            Outcome::Hero => Some((&self.hero, villain)),
            Outcome::Villain => Some((villain, &self.hero)),
            Outcome::Tie => None,
        }
    }
}

impl std::fmt::Display for Showdown {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.villain {
            Some(villain) => write!(f, "{} vs {} on {}: {}", self.hero, villain, self.board, self.outcome),
            None => write!(f, "{} vs ???? on {}: {}", self.hero, self.board, self.outcome),
        }
    }
}
