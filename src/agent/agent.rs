use super::context::RoundContext;
use super::context::RoundEnd;
use super::lock::CheckfoldLock;
use super::spot::Spot;
use crate::Utility;
use crate::action::Action;
use crate::action::Realizer;
use crate::cards::Hole;
use crate::cards::Street;
use crate::evaluation::Oracle;
use crate::evaluation::Simulator;
use crate::order::OrderGraph;
use crate::order::Verdict;
use crate::showdown::Outcome;
use crate::showdown::RuleExtractor;
use crate::showdown::Showdown;
use crate::strategy::Bucketer;
use crate::strategy::Engine;
use crate::strategy::Percentiles;
use crate::strategy::Phase;
use crate::strategy::Route;
use crate::strategy::ShoveCounts;
use crate::strategy::Situation;
use crate::strategy::Tables;
use crate::strength::PreflopTable;
use crate::strength::RankMapper;
use crate::strength::Reading;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// The heads-up player.
///
/// Owns everything that outlives a round: the learned rank order, the
/// strategy tables, opponent shove statistics and the checkfold lock.
/// The host drives it with [`Agent::begin`], any number of
/// [`Agent::act`] calls, and [`Agent::finish`].
#[derive(Debug)]
pub struct Agent<O: Oracle = Simulator> {
    graph: OrderGraph,
    engine: Engine,
    preflop: PreflopTable,
    oracle: O,
    realizer: Realizer,
    shoves: ShoveCounts,
    lock: CheckfoldLock,
    rng: SmallRng,
}

impl Agent<Simulator> {
    /// tables from the environment, Monte Carlo oracle
    pub fn load() -> anyhow::Result<Self> {
        let tables = Tables::load()?;
        let preflop = PreflopTable::load()?;
        let bucketer = Bucketer::from(Percentiles::from(&preflop));
        Ok(Self::new(Engine::new(bucketer, tables), preflop, Simulator))
    }
}

impl<O: Oracle> Agent<O> {
    pub fn new(engine: Engine, preflop: PreflopTable, oracle: O) -> Self {
        Self::with_rng(engine, preflop, oracle, SmallRng::from_rng(&mut rand::rng()))
    }
    pub fn seeded(engine: Engine, preflop: PreflopTable, oracle: O, seed: u64) -> Self {
        Self::with_rng(engine, preflop, oracle, SmallRng::seed_from_u64(seed))
    }
    fn with_rng(engine: Engine, preflop: PreflopTable, oracle: O, rng: SmallRng) -> Self {
        Self {
            graph: OrderGraph::default(),
            engine,
            preflop,
            oracle,
            realizer: Realizer,
            shoves: ShoveCounts::default(),
            lock: CheckfoldLock::default(),
            rng,
        }
    }

    pub fn graph(&self) -> &OrderGraph {
        &self.graph
    }
    pub fn shoves(&self) -> &ShoveCounts {
        &self.shoves
    }
    pub fn is_locked(&self) -> bool {
        self.lock.is_locked()
    }

    /// a fresh round with its preflop reading under the current estimate
    pub fn begin(&mut self, hole: Hole) -> anyhow::Result<RoundContext> {
        log::debug!("estimate {}", self.graph.estimate());
        let mapper = RankMapper::from(self.graph.estimate());
        let reading = self.preflop.get(&mapper.hole(&hole))?;
        log::debug!("dealt {} preflop {}", hole, reading);
        Ok(RoundContext::new(hole, reading))
    }

    pub fn act(&mut self, ctx: &mut RoundContext, spot: &Spot) -> anyhow::Result<Action> {
        if self.lock.is_locked() || spot.legal.len() == 1 {
            return Ok(spot.legal.passive());
        }
        if spot.street() != ctx.street {
            ctx.board.advance(&spot.board);
            ctx.street = ctx.board.street();
            ctx.reading = self.read(ctx)?;
            log::debug!("{} {} {}", ctx.street, ctx.board, ctx.reading);
        }
        let continue_cost = spot.continue_cost();
        let pot_after_continue = spot.pot_after_continue();
        let situation = Situation {
            button: spot.button,
            continue_cost: continue_cost as Utility,
            pot_after_continue: pot_after_continue as Utility,
            street: ctx.street,
            strength: ctx.reading.strength,
        };
        let decision = self.engine.choose(&mut self.rng, &situation, &self.shoves);
        if decision.route == Route::Shove {
            ctx.faced[Phase::from(ctx.street) as usize] = true;
        }
        let action = self.realizer.realize(
            &mut self.rng,
            decision.choice,
            &spot.legal,
            spot.pip(),
            continue_cost,
            pot_after_continue,
        );
        log::debug!("{:?} {} -> {}", decision.route, decision.choice, action);
        Ok(action)
    }

    /// end-of-round bookkeeping and, given a full showdown, rank learning
    pub fn finish(&mut self, ctx: RoundContext, end: &RoundEnd) -> Verdict {
        self.lock.update(end.bankroll, end.round_num);
        let postflop = ctx.street != Street::Pref;
        let mut board = ctx.board;
        board.advance(&end.board);
        let verdict = match end.villain {
            Some(villain) if board.is_complete() => {
                let showdown = Showdown::new(ctx.hole, Some(villain), board, Outcome::from(end.delta));
                let rules = RuleExtractor::new(&self.oracle, &self.graph).extract(&showdown);
                self.graph.apply_batch(&rules)
            }
            _ => Verdict::Abstained,
        };
        self.shoves.record(ctx.faced, postflop);
        verdict
    }

    fn read(&self, ctx: &mut RoundContext) -> anyhow::Result<Reading> {
        let mapper = RankMapper::from(self.graph.estimate());
        match ctx.street {
            Street::Pref => self.preflop.get(&mapper.hole(&ctx.hole)),
            _ => Ok(ctx.cache.get(&self.oracle, &mapper, &ctx.hole, &ctx.board)),
        }
    }
}
