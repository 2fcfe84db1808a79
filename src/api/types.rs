//! Request and response payloads for the backend API

use serde::{Deserialize, Serialize};

/// Payload for creating a role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleRequest {
    /// Full role name (already unit-prefixed where applicable)
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Payload for updating a role's name/description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// Full role name (already unit-prefixed where applicable)
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Error body shape the backend returns on rejection
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    /// Server-reported reason
    pub message: Option<String>,
}
