//! REST backend boundary
//!
//! The console is a client of a JSON REST API. The [`ConsoleBackend`] trait
//! is the stable seam between the core subsystem and HTTP plumbing;
//! [`ApiClient`] is the `reqwest`-based implementation.

mod backend;
mod client;
mod types;

// Re-export public types
pub use backend::ConsoleBackend;
pub use client::ApiClient;
pub use types::{CreateRoleRequest, UpdateRoleRequest};

#[cfg(test)]
pub use backend::MockConsoleBackend;
