//! Core Module - Infrastructure components of the application
//!
//! - Configuration
//! - Error handling
//! - Application state

pub mod config;
pub mod error;
pub mod state;

// Re-exports
pub use config::{Config, StoreBackend};
pub use error::{AppError, ErrorResponse};
pub use state::AppState;
