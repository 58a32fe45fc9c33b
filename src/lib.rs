//! Decision core for heads-up hold'em under an unknown rank permutation.
//!
//! The true order of the thirteen ranks is hidden. Showdowns feed an
//! [`order::OrderGraph`] of precedence facts, whose topological order relabels
//! cards before any hand evaluation. Decisions come from bucketed
//! regret/strategy tables through [`strategy::Engine`] and are realized into
//! legal actions by [`action::Realizer`].
pub mod action;
pub mod agent;
pub mod cards;
pub mod evaluation;
pub mod order;
pub mod showdown;
pub mod strategy;
pub mod strength;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip amounts as reported by the host.
pub type Chips = i32;
/// Regret sums, strategy sums, pot fractions.
pub type Utility = f32;
/// Win probabilities and action distributions.
pub type Probability = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

// ============================================================================
// BUCKETING
// Cutoffs are part of the table format. Changing any of them invalidates
// every precomputed regret and strategy row.
// ============================================================================
/// Continue-cost tier boundaries (10 tiers).
pub const CONTINUE_CUTOFFS: [Utility; 9] = [2.5, 10., 22.5, 40., 62.5, 90., 117.5, 145., 172.5];
/// Pot-after-continue tier boundaries (10 tiers).
pub const POT_CUTOFFS: [Utility; 9] = [5., 20., 45., 80., 125., 180., 235., 290., 345.];
/// Postflop strength tier boundaries (20 tiers).
pub const STRENGTH_CUTOFFS: [Probability; 19] = [
    0.05, 0.10, 0.15, 0.20, 0.25, 0.30, 0.35, 0.40, 0.45, 0.50, //
    0.55, 0.60, 0.65, 0.70, 0.75, 0.80, 0.85, 0.90, 0.95,
];
/// Preflop strength tiers are percentiles 1..=99 of the preflop table.
pub const PREFLOP_TIERS: usize = 99;

// ============================================================================
// STRATEGY SELECTION
// ============================================================================
/// Abstract actions per bucket row.
pub const N_ACTIONS: usize = 4;
/// Strategy-row visitation below which the learned policy is not trusted.
pub const COLD_START_VISITS: Utility = 1000.;
/// Continue-cost / pot-after-continue ratio that routes to the shove heuristic.
pub const SHOVE_POT_ODDS: Probability = 0.4;
/// Rounds observed in a phase before opponent shove frequency is trusted.
pub const SHOVE_MIN_ROUNDS: u32 = 50;
/// Ceiling on the strength required to call a shove.
pub const SHOVE_MAX_THRESHOLD: Probability = 0.99;
/// Strength above which the default heuristic always bets large.
pub const NUTS_STRENGTH: Probability = 0.85;
/// Strength penalty when facing more than a one-chip bet.
pub const INTIMIDATION: Probability = 0.25;

// ============================================================================
// BET SIZING
// Fractions of pot-after-continue, sampled from N(mean, BET_DEVIATION).
// ============================================================================
pub const SMALL_BET: Utility = 0.75;
pub const LARGE_BET: Utility = 1.25;
pub const BET_DEVIATION: Utility = 0.5;
pub const BET_CAP: Utility = 2.0;

// ============================================================================
// HAND EVALUATION
// ============================================================================
/// Monte Carlo iterations per postflop oracle call.
pub const SIMULATIONS: usize = 100;
/// Heads-up.
pub const N_PLAYERS: usize = 2;
/// Win-probability multiplier for hands the oracle calls a straight.
pub const STRAIGHT_DISCOUNT: Probability = 0.5;

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
pub const STARTING_STACK: Chips = 200;
pub const BIG_BLIND: Chips = 2;
pub const SMALL_BLIND: Chips = 1;
pub const NUM_ROUNDS: u32 = 1000;
/// Average blind cost per round of checking and folding.
pub const CHECKFOLD_COST: Utility = 1.5;

// ============================================================================
// TABLE LOCATIONS
// Overridable through environment variables of the same name.
// ============================================================================
pub const REGRET_TABLE: &str = "regretsum.csv";
pub const STRATEGY_TABLE: &str = "stratsum.csv";
pub const PREFLOP_TABLE: &str = "preflop_odds.json";

/// Resolve a table path from the environment, falling back to the default.
pub fn path(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| String::from(default))
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Install a terminal logger at INFO and a file logger at DEBUG.
///
/// The file is `<dir>/permuted-holdem-<unix seconds>.log`. Only one
/// logger can be installed per process; later calls are errors.
#[cfg(feature = "logging")]
pub fn log(dir: &str) -> anyhow::Result<std::path::PathBuf> {
    use anyhow::Context;
    std::fs::create_dir_all(dir).with_context(|| format!("create log directory {}", dir))?;
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let path = std::path::Path::new(dir).join(format!("permuted-holdem-{}.log", secs));
    let file = std::fs::File::create(&path).with_context(|| format!("create log file {}", path.display()))?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::CombinedLogger::init(vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            config.clone(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(log::LevelFilter::Debug, config, file),
    ])
    .context("install logger")?;
    log::info!("logging to {}", path.display());
    Ok(path)
}
