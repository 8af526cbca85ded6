// Shared kernel used by every module

pub mod config; // Run configuration (source URLs, output paths)
pub mod errors; // Shared error types
pub mod utils; // Logging helpers

// Re-exports for convenience
pub use config::SyncConfig;
pub use errors::{AppError, AppResult};
