pub mod extractor;
pub use extractor::*;

pub mod made;
pub use made::*;

pub mod outcome;
pub use outcome::*;

pub mod showdown;
pub use showdown::*;
