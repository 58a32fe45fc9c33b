pub mod agent;
pub use agent::*;

pub mod context;
pub use context::*;

pub mod lock;
pub use lock::*;

pub mod spot;
pub use spot::*;
