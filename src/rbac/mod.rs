//! Role-based access control with delegated role authoring
//!
//! The core subsystem of the console: a principal (superuser or
//! filiale-scoped manager) creates subordinate roles and grants them only a
//! subset of the permissions it holds itself, through a module-grouped
//! permission editor constrained by the principal's delegation authority.

mod admin;
mod authority;
mod catalog;
mod editor;
pub mod naming;
mod session;
mod types;

// Re-export public types
pub use admin::{RoleAdmin, VIEW_ASSIGNED_PERMISSIONS};
pub use authority::{AuthorityResolver, AuthoritySet};
pub use catalog::{ModuleGroup, PermissionCatalog};
pub use editor::{EditorState, PermissionEditor};
pub use session::SessionPermissions;
pub use types::{Permission, PermissionCode, Principal, PrincipalId, Role, RoleId};
