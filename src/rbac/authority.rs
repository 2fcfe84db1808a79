//! Delegation authority resolution
//!
//! Computes, for the acting principal, the set of permission codes it may
//! currently grant to a role it owns: held codes ∩ backend-declared
//! delegable codes. The set is resolved fresh on every editor open and never
//! cached across sessions.

use super::session::SessionPermissions;
use super::types::{PermissionCode, PrincipalId};
use crate::api::ConsoleBackend;
use crate::utils::error::Result;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// The set of permission codes a principal may currently delegate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthoritySet(HashSet<PermissionCode>);

impl AuthoritySet {
    /// Whether the principal may delegate the given code
    pub fn contains(&self, code: &PermissionCode) -> bool {
        self.0.contains(code)
    }

    /// Number of delegable codes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the principal may delegate nothing at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the delegable codes
    pub fn iter(&self) -> impl Iterator<Item = &PermissionCode> {
        self.0.iter()
    }
}

impl FromIterator<PermissionCode> for AuthoritySet {
    fn from_iter<I: IntoIterator<Item = PermissionCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Resolves the acting principal's delegation authority
pub struct AuthorityResolver {
    backend: Arc<dyn ConsoleBackend>,
    session: Arc<SessionPermissions>,
    principal_id: PrincipalId,
}

impl AuthorityResolver {
    /// Create a resolver bound to one principal
    pub fn new(
        backend: Arc<dyn ConsoleBackend>,
        session: Arc<SessionPermissions>,
        principal_id: PrincipalId,
    ) -> Self {
        Self {
            backend,
            session,
            principal_id,
        }
    }

    /// Re-fetch the principal's own current permission codes and publish
    /// them to the shared session state, so concurrently rendered UI picks
    /// up role changes made moments earlier.
    pub async fn refresh_principal_permissions(&self) -> Result<()> {
        let codes = self
            .backend
            .principal_permissions(self.principal_id)
            .await?;
        debug!(
            "Refreshed {} held permissions for principal {}",
            codes.len(),
            self.principal_id
        );
        self.session.replace(codes);
        Ok(())
    }

    /// Resolve the principal's current authority set.
    ///
    /// The held-permission refresh runs first and the delegable fetch only
    /// afterwards: the intersection must be taken against fresh state, never
    /// a stale snapshot. Either fetch failing propagates, so callers abort
    /// instead of working from a partial set.
    pub async fn resolve_assignable(&self) -> Result<AuthoritySet> {
        self.refresh_principal_permissions().await?;

        let delegable = self
            .backend
            .delegable_permissions(self.principal_id)
            .await?;
        let held = self.session.snapshot();

        let authority: AuthoritySet = delegable
            .into_iter()
            .filter(|code| held.contains(code))
            .collect();
        debug!(
            "Resolved authority set for principal {}: {} delegable codes",
            self.principal_id,
            authority.len()
        );
        Ok(authority)
    }
}
