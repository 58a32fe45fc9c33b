use super::action::Action;
use super::action::Legal;
use super::choice::Choice;
use crate::Chips;
use crate::Utility;
use rand::Rng;

/// Turns abstract choices into legal host actions.
///
/// Bet sizes are pot fractions drawn from a normal distribution around
/// the choice's mean, capped at [`crate::BET_CAP`] pots, truncated to
/// chips and clamped to the raise bounds.
#[derive(Debug, Default, Clone, Copy)]
pub struct Realizer;

impl Realizer {
    pub fn realize<R: Rng>(
        &self,
        rng: &mut R,
        choice: Choice,
        legal: &Legal,
        pip: Chips,
        continue_cost: Chips,
        pot_after_continue: Chips,
    ) -> Action {
        match choice {
            Choice::CheckFold => legal.passive(),
            Choice::CheckCall if legal.check => Action::Check,
            Choice::CheckCall if legal.call => Action::Call,
            Choice::CheckCall => Action::Fold,
            Choice::BetSmall | Choice::BetLarge => {
                let mean = choice.fraction().expect("bets have fractions");
                let fraction = Self::fraction(rng, mean);
                match legal.raise {
                    Some(bounds) => {
                        let commit = (pip + continue_cost) as Utility + fraction * pot_after_continue as Utility;
                        Action::Raise(bounds.clamp(commit as Chips))
                    }
                    None if legal.call => Action::Call,
                    None => Action::Check,
                }
            }
        }
    }

    /// N(mean, BET_DEVIATION) by Box-Muller, capped above
    fn fraction<R: Rng>(rng: &mut R, mean: Utility) -> Utility {
        let u = 1. - rng.random::<Utility>();
        let v = rng.random::<Utility>();
        let z = (-2. * u.ln()).sqrt() * (std::f32::consts::TAU * v).cos();
        (mean + crate::BET_DEVIATION * z).min(crate::BET_CAP)
    }
}
