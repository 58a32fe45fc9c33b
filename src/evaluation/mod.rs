pub mod evaluator;
pub use evaluator::*;

pub mod hand_type;
pub use hand_type::*;

pub mod oracle;
pub use oracle::*;

pub mod simulator;
pub use simulator::*;
