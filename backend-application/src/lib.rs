// Backend Application Layer

pub mod dtos;
pub mod error;
pub mod queries;
pub mod state;

pub use error::AppError;
pub use state::AppState;

#[cfg(test)]
mod testing;
