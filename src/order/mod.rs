pub mod graph;
pub use graph::*;

pub mod permutation;
pub use permutation::*;

pub mod rule;
pub use rule::*;

pub mod verdict;
pub use verdict::*;
