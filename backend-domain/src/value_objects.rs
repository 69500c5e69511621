// Domain value objects
pub mod tier;

pub use tier::*;
