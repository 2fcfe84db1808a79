//! Naming and ownership policy for delegated roles
//!
//! Delegated roles are named under their creator's organizational-unit
//! prefix and stay manageable only by their creator. One predicate,
//! [`can_manage`], gates edit, delete, and permission management uniformly.

use super::types::{Principal, Role};
use crate::utils::error::{ConsoleError, Result};

/// Reserved superuser role name; never assignable to a delegated role
pub const RESERVED_SUPERUSER_ROLE: &str = "ADMIN";

/// Separator between the unit prefix and the short role name
pub const UNIT_SEPARATOR: char = '-';

/// Derive a principal's unit prefix: unit code upper-cased plus separator
/// (e.g. `niger` → `NIGER-`)
pub fn unit_prefix(unit_code: &str) -> String {
    format!("{}{}", unit_code.trim().to_uppercase(), UNIT_SEPARATOR)
}

/// Compose the stored name for a role created by the given principal.
///
/// Non-superuser principals get the submitted short name concatenated after
/// their unit prefix; superusers use the short name as-is. The reserved
/// superuser role name is rejected case-insensitively in both cases.
pub fn delegated_role_name(principal: &Principal, short_name: &str) -> Result<String> {
    let short_name = short_name.trim();
    if short_name.is_empty() {
        return Err(ConsoleError::validation("Role name cannot be empty"));
    }

    let full_name = if principal.superuser {
        short_name.to_string()
    } else {
        if principal.unit_code.trim().is_empty() {
            return Err(ConsoleError::validation(
                "Principal has no organizational unit; cannot derive role prefix",
            ));
        }
        format!("{}{}", unit_prefix(&principal.unit_code), short_name)
    };

    if full_name.eq_ignore_ascii_case(RESERVED_SUPERUSER_ROLE) {
        return Err(ConsoleError::validation(format!(
            "'{}' is reserved for the superuser role",
            RESERVED_SUPERUSER_ROLE
        )));
    }

    Ok(full_name)
}

/// Ownership check gating edit, delete, and permission management.
///
/// System roles are never manageable, regardless of who created them; a
/// non-system role is manageable only by its creator.
pub fn can_manage(role: &Role, principal: &Principal) -> bool {
    if role.is_system {
        return false;
    }
    role.created_by == Some(principal.id)
}
