// Core modules
pub mod config;
pub mod state;
pub mod services;
pub mod types;
pub mod web;

// Re-exports
pub use config::{Config, ConfigError};
pub use state::AppState;
pub use web::{create_app, start_server};
