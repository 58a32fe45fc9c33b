use super::bucket::Bucketer;
use super::heuristic;
use super::heuristic::Phase;
use super::heuristic::ShoveCounts;
use super::regret::calculate_strategy;
use super::tables::Tables;
use crate::Probability;
use crate::Utility;
use crate::action::Choice;
use crate::cards::Street;
use rand::Rng;

/// Which table row the learned policy is read from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// accumulated strategy sums, the average policy
    #[default]
    Average,
    /// regret sums, the current policy
    Regret,
}

/// Which branch produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Shove,
    ColdStart,
    Learned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub choice: Choice,
    pub route: Route,
}

/// Everything about a decision point the engine looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Situation {
    pub button: usize,
    pub continue_cost: Utility,
    pub pot_after_continue: Utility,
    pub street: Street,
    pub strength: Probability,
}

impl Situation {
    /// share of the pot we are asked to put in. nothing in the pot
    /// means nothing to call.
    pub fn pot_odds(&self) -> Probability {
        if self.pot_after_continue == 0. {
            0.
        } else {
            self.continue_cost / self.pot_after_continue
        }
    }
}

/// Picks an abstract action for a situation.
///
/// Big bets go to the shove heuristic, buckets with too little training
/// go to pot-odds play, everything else samples the learned policy.
#[derive(Debug, Clone)]
pub struct Engine {
    bucketer: Bucketer,
    tables: Tables,
    source: Source,
}

impl Engine {
    pub fn new(bucketer: Bucketer, tables: Tables) -> Self {
        Self::with_source(bucketer, tables, Source::default())
    }
    pub fn with_source(bucketer: Bucketer, tables: Tables, source: Source) -> Self {
        Self {
            bucketer,
            tables,
            source,
        }
    }
    pub fn source(&self) -> Source {
        self.source
    }

    pub fn choose<R: Rng>(&self, rng: &mut R, situation: &Situation, shoves: &ShoveCounts) -> Decision {
        let pot_odds = situation.pot_odds();
        if pot_odds >= crate::SHOVE_POT_ODDS {
            let phase = Phase::from(situation.street);
            let choice = shoves.shove(rng, phase, situation.continue_cost, pot_odds, situation.strength);
            log::debug!("shove {:?} odds {:.2} -> {}", phase, pot_odds, choice);
            return Decision {
                choice,
                route: Route::Shove,
            };
        }
        let bucket = self.bucketer.get_bucket(
            situation.button,
            situation.continue_cost,
            situation.pot_after_continue,
            situation.street,
            situation.strength,
        );
        let visits = self.tables.visits(bucket);
        if visits < crate::COLD_START_VISITS {
            let choice = heuristic::default(rng, situation.continue_cost, pot_odds, situation.strength);
            log::debug!("{} cold ({} visits) -> {}", bucket, visits, choice);
            return Decision {
                choice,
                route: Route::ColdStart,
            };
        }
        let row = match self.source {
            Source::Average => self.tables.strategy(bucket),
            Source::Regret => self.tables.regret(bucket),
        };
        let policy = calculate_strategy(row);
        let choice = policy.sample(rng.random());
        log::debug!("{} {:?} -> {}", bucket, policy.weights(), choice);
        Decision {
            choice,
            route: Route::Learned,
        }
    }
}
