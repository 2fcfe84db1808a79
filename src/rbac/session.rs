//! Session permission state
//!
//! Process-scoped view of the acting principal's currently held permission
//! codes, used for live UI gating. New data only enters through an explicit
//! `replace` (driven by `AuthorityResolver::refresh_principal_permissions`),
//! so components never silently read a snapshot older than the last known
//! mutation.

use super::types::PermissionCode;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashSet;

#[derive(Debug, Default)]
struct SessionState {
    codes: HashSet<PermissionCode>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Shared, process-scoped store of the principal's held permission codes
#[derive(Debug, Default)]
pub struct SessionPermissions {
    inner: RwLock<SessionState>,
}

impl SessionPermissions {
    /// Create an empty session store (no refresh has happened yet)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held set wholesale and stamp the refresh time
    pub fn replace(&self, codes: impl IntoIterator<Item = PermissionCode>) {
        let mut state = self.inner.write();
        state.codes = codes.into_iter().collect();
        state.refreshed_at = Some(Utc::now());
    }

    /// Whether the principal currently holds the given code
    pub fn has(&self, code: &PermissionCode) -> bool {
        self.inner.read().codes.contains(code)
    }

    /// Snapshot of the held set
    pub fn snapshot(&self) -> HashSet<PermissionCode> {
        self.inner.read().codes.clone()
    }

    /// When the held set was last refreshed; `None` before the first refresh
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.inner.read().refreshed_at
    }

    /// Whether a refresh has ever completed
    pub fn is_initialized(&self) -> bool {
        self.inner.read().refreshed_at.is_some()
    }
}
