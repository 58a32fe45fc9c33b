pub mod cache;
pub use cache::*;

pub mod mapper;
pub use mapper::*;

pub mod preflop;
pub use preflop::*;
