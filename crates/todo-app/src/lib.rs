//! Application layer for the todo list.
//!
//! A [`TodoSession`] is the single mutable handle owned by whatever renders the
//! list: it hydrates state on open, routes user intents through the reducer,
//! and keeps snapshots current.

pub mod config;
pub mod session;

// Re-exports for convenience
pub use config::{AppConfig, StorageConfig, ViewConfig};
pub use session::{SessionOptions, TodoSession};
