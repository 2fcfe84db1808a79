//! Backend trait: the contracts this subsystem consumes
//!
//! All calls are single request/response round trips with no client-side
//! retries; failures surface immediately to the operator.

use super::types::{CreateRoleRequest, UpdateRoleRequest};
use crate::rbac::{Permission, PermissionCode, PrincipalId, Role, RoleId};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Stable interface to the REST backend.
///
/// Implemented by [`super::ApiClient`]; mockable in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConsoleBackend: Send + Sync {
    /// Fetch the role list
    async fn list_roles(&self) -> Result<Vec<Role>>;

    /// Fetch the permission catalog
    async fn permission_catalog(&self) -> Result<Vec<Permission>>;

    /// Fetch a role's current permission codes
    async fn role_permissions(&self, role_id: RoleId) -> Result<Vec<PermissionCode>>;

    /// Fetch a principal's own currently held permission codes
    async fn principal_permissions(&self, principal_id: PrincipalId)
    -> Result<Vec<PermissionCode>>;

    /// Fetch the codes the backend declares delegable for a principal
    async fn delegable_permissions(&self, principal_id: PrincipalId)
    -> Result<Vec<PermissionCode>>;

    /// Replace a role's permission codes wholesale; returns the persisted set
    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        codes: Vec<PermissionCode>,
    ) -> Result<Vec<PermissionCode>>;

    /// Create a role
    async fn create_role(&self, request: CreateRoleRequest) -> Result<Role>;

    /// Update a role's name/description
    async fn update_role(&self, role_id: RoleId, request: UpdateRoleRequest) -> Result<Role>;

    /// Delete a role
    async fn delete_role(&self, role_id: RoleId) -> Result<()>;
}
