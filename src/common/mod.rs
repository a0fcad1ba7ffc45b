// Common module - shared types and utilities across all modules

pub mod context;
pub mod error;
pub mod migrations;
pub mod respond;
pub mod state;

#[cfg(test)]
pub mod testing;

// Re-export commonly used types for convenience
pub use error::ServiceError;
pub use state::AppState;
