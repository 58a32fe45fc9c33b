pub mod bucket;
pub use bucket::*;

pub mod engine;
pub use engine::*;

pub mod heuristic;
pub use heuristic::Phase;
pub use heuristic::ShoveCounts;

pub mod percentile;
pub use percentile::*;

pub mod regret;
pub use regret::*;

pub mod tables;
pub use tables::*;
