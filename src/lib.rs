//! # helpdesk-console
//!
//! Core library for an IT-service-management admin console. The console's
//! CRUD surfaces (tickets, assets, SLAs, departments, projects) are thin
//! wrappers around a REST backend; this crate implements the subsystem with
//! actual design weight: role-based access control with delegated role
//! authoring.
//!
//! ## Features
//!
//! - **Delegated role authoring**: a principal can create subordinate roles
//!   and grant them only a subset of the permissions it holds itself
//! - **Module-grouped permission editor**: toggle single codes or whole
//!   modules, constrained by the principal's delegation authority
//! - **Full-replacement commits**: the editor submits a complete desired set;
//!   codes outside the principal's authority pass through unchanged
//! - **Unit-prefixed naming**: delegated roles are named under their
//!   creator's organizational-unit prefix and stay owned by their creator
//! - **REST backend client**: async `reqwest` client behind a mockable trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use helpdesk_console::{ApiClient, ConsoleConfig, Principal, RoleAdmin};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConsoleConfig::load(None)?;
//!     let backend = Arc::new(ApiClient::new(config.api.clone())?);
//!
//!     let principal = Principal::manager(7, "Awa", "niger", vec![]);
//!     let mut admin = RoleAdmin::load(backend, principal).await?;
//!
//!     for role in admin.roles() {
//!         println!("{} (system: {})", role.name, role.is_system);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

// Public module exports
pub mod api;
pub mod config;
pub mod rbac;
pub mod utils;

// Re-export main types
pub use api::{ApiClient, ConsoleBackend};
pub use config::{ApiConfig, ConsoleConfig, LoggingConfig};
pub use rbac::{
    AuthorityResolver, AuthoritySet, EditorState, ModuleGroup, Permission, PermissionCatalog,
    PermissionCode, PermissionEditor, Principal, PrincipalId, Role, RoleAdmin, RoleId,
    SessionPermissions,
};
pub use utils::error::{ConsoleError, Result};
