//! Core RBAC entity types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable permission identifier (e.g. `assets.delete`).
///
/// The permission universe is data-driven and extensible, so codes are
/// modeled as strings rather than an enum. Authority checks are plain set
/// operations over this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionCode(String);

impl PermissionCode {
    /// Create a permission code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// View the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PermissionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PermissionCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for PermissionCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// Role identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RoleId(pub i64);

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Principal identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PrincipalId(pub i64);

impl fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Permission catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    /// Unique stable identifier, never reused
    pub code: PermissionCode,
    /// Grouping key used for display ordering and bulk toggling only,
    /// never for authorization
    pub module: String,
    /// Human-readable label
    pub name: String,
    /// Longer description, if any
    #[serde(default)]
    pub description: Option<String>,
}

/// Role entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique identifier
    pub id: RoleId,
    /// Unique name; unit-prefixed for delegated roles
    pub name: String,
    /// Optional free text
    #[serde(default)]
    pub description: Option<String>,
    /// System roles cannot be edited, deleted, or re-permissioned
    #[serde(default)]
    pub is_system: bool,
    /// Creator of the role; absent for system roles
    #[serde(default)]
    pub created_by: Option<PrincipalId>,
}

/// The authenticated actor performing console actions: an administrator or
/// a filiale-scoped manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// Unique identifier
    pub id: PrincipalId,
    /// Display name
    pub name: String,
    /// Organizational-unit (filiale) code; prefixes delegated role names
    pub unit_code: String,
    /// Superusers create roles without a unit prefix
    pub superuser: bool,
    /// Roles this principal belongs to
    #[serde(default)]
    pub role_ids: Vec<RoleId>,
}

impl Principal {
    /// Build a filiale-scoped manager principal
    pub fn manager(
        id: i64,
        name: impl Into<String>,
        unit_code: impl Into<String>,
        role_ids: Vec<RoleId>,
    ) -> Self {
        Self {
            id: PrincipalId(id),
            name: name.into(),
            unit_code: unit_code.into(),
            superuser: false,
            role_ids,
        }
    }

    /// Build a superuser principal
    pub fn superuser(id: i64, name: impl Into<String>, role_ids: Vec<RoleId>) -> Self {
        Self {
            id: PrincipalId(id),
            name: name.into(),
            unit_code: String::new(),
            superuser: true,
            role_ids,
        }
    }

    /// Whether this principal belongs to the given role
    pub fn belongs_to(&self, role_id: RoleId) -> bool {
        self.role_ids.contains(&role_id)
    }
}
