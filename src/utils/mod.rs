//! Shared utilities
//!
//! Error taxonomy and logging setup used across the crate.

pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{ConsoleError, Result};
pub use logging::init_logging;
