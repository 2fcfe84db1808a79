//! Role administration facade
//!
//! Orchestrates the core subsystem: loads the role list and permission
//! catalog, opens permission editors through the delegation authority flow,
//! commits them, and applies the naming/ownership policy to role CRUD.
//! Authorization failures surface before any backend call for the gated
//! operation.

use super::authority::AuthorityResolver;
use super::catalog::PermissionCatalog;
use super::editor::PermissionEditor;
use super::naming;
use super::session::SessionPermissions;
use super::types::{PermissionCode, Principal, Role, RoleId};
use crate::api::{ConsoleBackend, CreateRoleRequest, UpdateRoleRequest};
use crate::utils::error::{ConsoleError, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Capability letting a non-owner open the permission editor read-only
pub const VIEW_ASSIGNED_PERMISSIONS: &str = "roles.view_permissions";

/// Role administration facade
pub struct RoleAdmin {
    backend: Arc<dyn ConsoleBackend>,
    session: Arc<SessionPermissions>,
    principal: Principal,
    roles: Vec<Role>,
    catalog: PermissionCatalog,
}

impl RoleAdmin {
    /// Load the console state for the acting principal.
    ///
    /// The role list, the permission catalog, and the principal's held
    /// permissions are mutually independent fetches, so they run
    /// concurrently. Any failure aborts the load.
    pub async fn load(backend: Arc<dyn ConsoleBackend>, principal: Principal) -> Result<Self> {
        info!("Loading role administration for principal {}", principal.id);

        let (roles, permissions, held) = tokio::try_join!(
            backend.list_roles(),
            backend.permission_catalog(),
            backend.principal_permissions(principal.id),
        )?;

        let session = Arc::new(SessionPermissions::new());
        session.replace(held);

        info!(
            "Loaded {} roles and a catalog of {} permissions",
            roles.len(),
            permissions.len()
        );

        Ok(Self {
            backend,
            session,
            principal,
            roles,
            catalog: PermissionCatalog::new(permissions),
        })
    }

    /// The last loaded role list
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// The permission catalog
    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// The shared session permission state
    pub fn session(&self) -> &Arc<SessionPermissions> {
        &self.session
    }

    /// The acting principal
    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    /// Whether the acting principal may manage (edit, delete,
    /// re-permission) the given role
    pub fn can_manage(&self, role: &Role) -> bool {
        naming::can_manage(role, &self.principal)
    }

    fn resolver(&self) -> AuthorityResolver {
        AuthorityResolver::new(
            Arc::clone(&self.backend),
            Arc::clone(&self.session),
            self.principal.id,
        )
    }

    fn role(&self, role_id: RoleId) -> Result<&Role> {
        self.roles
            .iter()
            .find(|r| r.id == role_id)
            .ok_or_else(|| ConsoleError::NotFound(format!("Role {} not loaded", role_id)))
    }

    /// Re-fetch the role list
    pub async fn refresh_roles(&mut self) -> Result<()> {
        self.roles = self.backend.list_roles().await?;
        debug!("Role list refreshed: {} roles", self.roles.len());
        Ok(())
    }

    /// Open the permission editor for a role.
    ///
    /// Owners get an editable instance; a non-owner holding the
    /// "view assigned permissions" capability gets a read-only one. Anyone
    /// else is rejected before a single backend call is made. The load phase
    /// resolves the authority set (held refresh, then delegable fetch,
    /// strictly in that order) concurrently with the role's current
    /// assignment; if anything fails no editor is produced.
    pub async fn open_editor(&self, role_id: RoleId) -> Result<PermissionEditor> {
        let role = self.role(role_id)?.clone();

        let editable = self.can_manage(&role);
        if !editable
            && !self
                .session
                .has(&PermissionCode::from(VIEW_ASSIGNED_PERMISSIONS))
        {
            return Err(ConsoleError::authorization(format!(
                "Principal {} may neither manage nor view permissions of role '{}'",
                self.principal.id, role.name
            )));
        }

        let resolver = self.resolver();
        let (authority, current) = tokio::try_join!(
            resolver.resolve_assignable(),
            self.backend.role_permissions(role_id),
        )?;

        debug!(
            "Opened editor for role '{}' ({} assigned, {} delegable, read_only: {})",
            role.name,
            current.len(),
            authority.len(),
            !editable
        );
        Ok(PermissionEditor::open(role, current, authority, !editable))
    }

    /// Commit an editor's working set as the role's full replacement
    /// assignment.
    ///
    /// On success the editor closes, the role list is refreshed, and, when
    /// the acting principal belongs to the edited role, the session
    /// permission state is refreshed so the rest of the UI reflects the
    /// change without re-login. On failure the editor reopens with the
    /// working set intact and the server-reported reason in the error.
    pub async fn commit_editor(&mut self, editor: &mut PermissionEditor) -> Result<()> {
        let role_id = editor.role().id;
        let codes = editor.begin_commit()?;

        match self
            .backend
            .replace_role_permissions(role_id, codes)
            .await
        {
            Ok(persisted) => {
                editor.commit_succeeded();
                info!(
                    "Committed {} permissions to role {}",
                    persisted.len(),
                    role_id
                );

                self.refresh_roles().await?;
                if self.principal.belongs_to(role_id) {
                    self.resolver().refresh_principal_permissions().await?;
                }
                Ok(())
            }
            Err(e) => {
                editor.commit_failed();
                warn!("Commit to role {} rejected: {}", role_id, e);
                Err(e)
            }
        }
    }

    /// Create a role under the naming policy: non-superuser principals get
    /// the unit prefix prepended, and the reserved superuser name is
    /// rejected before any backend call.
    pub async fn create_role(
        &mut self,
        short_name: &str,
        description: Option<String>,
    ) -> Result<Role> {
        let name = naming::delegated_role_name(&self.principal, short_name)?;

        let role = self
            .backend
            .create_role(CreateRoleRequest { name, description })
            .await?;
        info!("Created role '{}' ({})", role.name, role.id);

        self.refresh_roles().await?;
        Ok(role)
    }

    /// Rename/redescribe a role; owner-gated, naming policy re-applied
    pub async fn update_role(
        &mut self,
        role_id: RoleId,
        short_name: &str,
        description: Option<String>,
    ) -> Result<Role> {
        let role = self.role(role_id)?;
        if !self.can_manage(role) {
            return Err(ConsoleError::authorization(format!(
                "Principal {} does not own role '{}'",
                self.principal.id, role.name
            )));
        }

        let name = naming::delegated_role_name(&self.principal, short_name)?;
        let updated = self
            .backend
            .update_role(role_id, UpdateRoleRequest { name, description })
            .await?;
        info!("Updated role {} to '{}'", role_id, updated.name);

        self.refresh_roles().await?;
        Ok(updated)
    }

    /// Delete a role; owner-gated
    pub async fn delete_role(&mut self, role_id: RoleId) -> Result<()> {
        let role = self.role(role_id)?;
        if !self.can_manage(role) {
            return Err(ConsoleError::authorization(format!(
                "Principal {} does not own role '{}'",
                self.principal.id, role.name
            )));
        }

        self.backend.delete_role(role_id).await?;
        info!("Deleted role {}", role_id);

        self.refresh_roles().await?;
        Ok(())
    }
}
