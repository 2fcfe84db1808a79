//! Permission catalog
//!
//! Read-only universe of permission codes, seeded and managed outside this
//! subsystem. The `module` attribute on a permission drives display ordering
//! and bulk toggling only; authority is always evaluated per individual code.

use super::types::{Permission, PermissionCode};
use std::collections::HashMap;
use tracing::warn;

/// Read-only permission catalog loaded from the backend
#[derive(Debug, Clone, Default)]
pub struct PermissionCatalog {
    permissions: Vec<Permission>,
    by_code: HashMap<PermissionCode, usize>,
}

/// One display group of the catalog: a module name and its permissions,
/// ordered by code
#[derive(Debug, Clone)]
pub struct ModuleGroup {
    /// Module name (grouping key)
    pub module: String,
    /// Permissions in this module, ordered by code
    pub permissions: Vec<Permission>,
}

impl PermissionCatalog {
    /// Build a catalog from backend data. Duplicate codes keep the first
    /// occurrence; later ones are dropped with a warning.
    pub fn new(permissions: Vec<Permission>) -> Self {
        let mut deduped: Vec<Permission> = Vec::with_capacity(permissions.len());
        let mut by_code = HashMap::with_capacity(permissions.len());

        for permission in permissions {
            if by_code.contains_key(&permission.code) {
                warn!("Duplicate permission code in catalog: {}", permission.code);
                continue;
            }
            by_code.insert(permission.code.clone(), deduped.len());
            deduped.push(permission);
        }

        Self {
            permissions: deduped,
            by_code,
        }
    }

    /// Number of permissions in the catalog
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Look up a permission by code
    pub fn get(&self, code: &PermissionCode) -> Option<&Permission> {
        self.by_code.get(code).map(|&i| &self.permissions[i])
    }

    /// Whether the catalog contains the given code
    pub fn contains(&self, code: &PermissionCode) -> bool {
        self.by_code.contains_key(code)
    }

    /// All codes in the catalog, in display order (module, then code)
    pub fn codes(&self) -> Vec<PermissionCode> {
        self.modules()
            .into_iter()
            .flat_map(|group| group.permissions.into_iter().map(|p| p.code))
            .collect()
    }

    /// Codes belonging to one module, ordered by code
    pub fn codes_in_module(&self, module: &str) -> Vec<PermissionCode> {
        let mut codes: Vec<PermissionCode> = self
            .permissions
            .iter()
            .filter(|p| p.module == module)
            .map(|p| p.code.clone())
            .collect();
        codes.sort();
        codes
    }

    /// The catalog grouped by module, with deterministic ordering: modules
    /// alphabetically, permissions within a module by code. Stable across
    /// loads so the grouped view does not reshuffle.
    pub fn modules(&self) -> Vec<ModuleGroup> {
        let mut grouped: HashMap<&str, Vec<&Permission>> = HashMap::new();
        for permission in &self.permissions {
            grouped.entry(&permission.module).or_default().push(permission);
        }

        let mut names: Vec<&str> = grouped.keys().copied().collect();
        names.sort_unstable();

        names
            .into_iter()
            .map(|name| {
                let mut permissions: Vec<Permission> =
                    grouped[name].iter().map(|&p| p.clone()).collect();
                permissions.sort_by(|a, b| a.code.cmp(&b.code));
                ModuleGroup {
                    module: name.to_string(),
                    permissions,
                }
            })
            .collect()
    }
}
