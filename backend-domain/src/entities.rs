// Domain entities

pub mod anomaly;
pub mod config;
pub mod stats;

pub use anomaly::*;
pub use config::*;
pub use stats::*;
