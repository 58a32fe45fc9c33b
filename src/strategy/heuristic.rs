use crate::Probability;
use crate::Utility;
use crate::action::Choice;
use crate::cards::Street;
use rand::Rng;

/// Pot-odds play for buckets the tables have not learned yet.
///
/// Near-nuts always bet large. Facing a bet, continue when strength
/// covers the pot odds, after a penalty for bets larger than a chip.
/// Otherwise bet small as often as the hand is strong.
pub fn default<R: Rng>(rng: &mut R, continue_cost: Utility, pot_odds: Probability, strength: Probability) -> Choice {
    if strength > crate::NUTS_STRENGTH {
        return Choice::BetLarge;
    }
    if continue_cost > 0. {
        let strength = match continue_cost > 1. {
            true => strength - crate::INTIMIDATION,
            false => strength,
        };
        if strength < pot_odds {
            Choice::CheckFold
        } else if strength > 0.5 && rng.random::<Probability>() < strength {
            Choice::BetSmall
        } else {
            Choice::CheckCall
        }
    } else if rng.random::<Probability>() < strength {
        Choice::BetSmall
    } else {
        Choice::CheckCall
    }
}

/// Betting rounds are split in two for shove tracking.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    Preflop = 0,
    Postflop = 1,
}

impl From<Street> for Phase {
    fn from(street: Street) -> Self {
        match street {
            Street::Pref => Self::Preflop,
            _ => Self::Postflop,
        }
    }
}

/// How often the opponent has put us to a shove decision, per phase.
///
/// `faced` counts rounds where the shove gate fired in that phase,
/// `seen` counts rounds that reached the phase.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ShoveCounts {
    faced: [u32; 2],
    seen: [u32; 2],
}

impl ShoveCounts {
    pub fn faced(&self, phase: Phase) -> u32 {
        self.faced[phase as usize]
    }
    pub fn seen(&self, phase: Phase) -> u32 {
        self.seen[phase as usize]
    }

    /// end-of-round bookkeeping. every round sees the preflop.
    pub fn record(&mut self, faced: [bool; 2], postflop: bool) {
        self.faced[Phase::Preflop as usize] += faced[Phase::Preflop as usize] as u32;
        self.faced[Phase::Postflop as usize] += faced[Phase::Postflop as usize] as u32;
        self.seen[Phase::Preflop as usize] += 1;
        self.seen[Phase::Postflop as usize] += postflop as u32;
    }

    /// all-in or fold once the opponent's shove rate is trusted:
    /// call off when strength beats half their shove rate's complement.
    pub fn shove<R: Rng>(
        &self,
        rng: &mut R,
        phase: Phase,
        continue_cost: Utility,
        pot_odds: Probability,
        strength: Probability,
    ) -> Choice {
        let faced = (self.faced(phase) + 1) as Probability;
        let seen = self.seen(phase) + 1;
        if seen < crate::SHOVE_MIN_ROUNDS {
            return default(rng, continue_cost, pot_odds, strength);
        }
        let threshold = (1. - faced / seen as Probability / 2.).min(crate::SHOVE_MAX_THRESHOLD);
        match strength >= threshold {
            true => Choice::BetLarge,
            false => Choice::CheckFold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(11)
    }

    #[test]
    fn nuts_bet_large() {
        let ref mut rng = rng();
        assert!(default(rng, 0., 0., 0.9) == Choice::BetLarge);
        assert!(default(rng, 50., 0.3, 0.9) == Choice::BetLarge);
    }

    #[test]
    fn bad_odds_fold() {
        let ref mut rng = rng();
        assert!(default(rng, 10., 0.3, 0.5) == Choice::CheckFold);
    }

    #[test]
    fn intimidation_only_above_one_chip() {
        let ref mut rng = rng();
        for _ in 0..100 {
            assert!(default(rng, 1., 0.2, 0.3) == Choice::CheckCall);
        }
        assert!(default(rng, 2., 0.2, 0.3) == Choice::CheckFold);
    }

    #[test]
    fn weak_hands_check_behind() {
        let ref mut rng = rng();
        for _ in 0..100 {
            assert!(default(rng, 0., 0., 0.) == Choice::CheckCall);
        }
    }

    #[test]
    fn never_folds_for_free() {
        let ref mut rng = rng();
        for _ in 0..1000 {
            let strength = rng.random::<Probability>();
            assert!(default(rng, 0., 0., strength) != Choice::CheckFold);
        }
    }

    #[test]
    fn records_phases() {
        let mut counts = ShoveCounts::default();
        counts.record([true, false], false);
        counts.record([false, true], true);
        assert!(counts.seen(Phase::Preflop) == 2);
        assert!(counts.seen(Phase::Postflop) == 1);
        assert!(counts.faced(Phase::Preflop) == 1);
        assert!(counts.faced(Phase::Postflop) == 1);
    }

    #[test]
    fn inexperience_defers_to_default() {
        let ref mut rng = rng();
        let counts = ShoveCounts::default();
        assert!(counts.shove(rng, Phase::Preflop, 100., 0.45, 0.9) == Choice::BetLarge);
        assert!(counts.shove(rng, Phase::Preflop, 100., 0.45, 0.1) == Choice::CheckFold);
    }

    #[test]
    fn frequent_shovers_are_called_lighter() {
        let ref mut rng = rng();
        let mut rare = ShoveCounts::default();
        let mut often = ShoveCounts::default();
        for i in 0..100 {
            rare.record([i % 20 == 0, false], false);
            often.record([i % 2 == 0, false], false);
        }
        assert!(rare.shove(rng, Phase::Preflop, 100., 0.45, 0.8) == Choice::CheckFold);
        assert!(often.shove(rng, Phase::Preflop, 100., 0.45, 0.8) == Choice::BetLarge);
    }

    #[test]
    fn threshold_is_capped() {
        let ref mut rng = rng();
        let mut never = ShoveCounts::default();
        for _ in 0..1000 {
            never.record([false, false], false);
        }
        assert!(never.shove(rng, Phase::Preflop, 100., 0.45, 0.99) == Choice::BetLarge);
        assert!(never.shove(rng, Phase::Preflop, 100., 0.45, 0.98) == Choice::CheckFold);
    }
}
