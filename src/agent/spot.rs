use crate::Chips;
use crate::action::Legal;
use crate::cards::Card;
use crate::cards::Street;

/// A decision point as the host reports it.
///
/// `pips` and `stacks` are indexed by seat, and the acting player sits
/// at seat `button`: 0 on the small blind, 1 on the big blind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spot {
    pub button: usize,
    pub board: Vec<Card>,
    pub pips: [Chips; 2],
    pub stacks: [Chips; 2],
    pub legal: Legal,
}

impl Spot {
    pub fn street(&self) -> Street {
        Street::from(self.board.len())
    }
    /// chips committed on this betting round
    pub fn pip(&self) -> Chips {
        self.pips[self.button]
    }
    /// chips needed to stay in the pot
    pub fn continue_cost(&self) -> Chips {
        self.pips[1 - self.button] - self.pips[self.button]
    }
    /// the pot if we call: both players' total contributions plus the call
    pub fn pot_after_continue(&self) -> Chips {
        let hero = crate::STARTING_STACK - self.stacks[self.button];
        let villain = crate::STARTING_STACK - self.stacks[1 - self.button];
        hero + villain + self.continue_cost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(button: usize, pips: [Chips; 2], stacks: [Chips; 2]) -> Spot {
        Spot {
            button,
            board: vec![],
            pips,
            stacks,
            legal: Legal::default(),
        }
    }

    #[test]
    fn small_blind_opens() {
        let spot = spot(0, [1, 2], [199, 198]);
        assert!(spot.street() == Street::Pref);
        assert!(spot.pip() == 1);
        assert!(spot.continue_cost() == 1);
        assert!(spot.pot_after_continue() == 4);
    }

    #[test]
    fn big_blind_facing_a_raise() {
        let spot = spot(1, [10, 2], [190, 198]);
        assert!(spot.pip() == 2);
        assert!(spot.continue_cost() == 8);
        assert!(spot.pot_after_continue() == 20);
    }

    #[test]
    fn nothing_to_call() {
        let spot = spot(1, [0, 0], [180, 180]);
        assert!(spot.continue_cost() == 0);
        assert!(spot.pot_after_continue() == 40);
    }
}
