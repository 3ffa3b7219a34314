//! Library entry point for the fakedetect backend.
//!
//! Exports all core modules for use in integration tests and by the main binary.

pub mod handlers;
pub mod logging;
pub mod models;
pub mod services;

pub use handlers::*;
pub use logging::*;
pub use models::AppState;
pub use models::*;
pub use services::*;
