use crate::Chips;
use crate::Utility;

/// Latches once the match is won on bankroll alone.
///
/// Checking and folding every remaining round costs about
/// [`crate::CHECKFOLD_COST`] per round in blinds. Once a winning bankroll
/// covers that for all rounds left, the agent stops taking risks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckfoldLock(bool);

impl CheckfoldLock {
    pub fn is_locked(&self) -> bool {
        self.0
    }
    /// `round` counts from 1. never unlocks.
    pub fn update(&mut self, bankroll: Chips, round: u32) {
        if self.0 || bankroll <= 0 {
            return;
        }
        let rounds_left = crate::NUM_ROUNDS as i64 - round as i64 + 1;
        let cost = crate::CHECKFOLD_COST * rounds_left as Utility;
        if bankroll as Utility - cost > 0. {
            log::info!("bankroll {} covers {} rounds of blinds, locking in", bankroll, rounds_left);
            self.0 = true;
        }
    }
}
