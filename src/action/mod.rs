pub mod action;
pub use action::*;

pub mod choice;
pub use choice::*;

pub mod realizer;
pub use realizer::*;
