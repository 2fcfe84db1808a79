//! Common test utilities for helpdesk-console
//!
//! A wiremock-backed fake of the console's REST backend plus fixtures used
//! across the integration tests.

use helpdesk_console::{ApiClient, ApiConfig, Principal, RoleId};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The acting filiale manager used by most tests: principal 7 of unit
/// `niger`, member of role 2
pub fn manager() -> Principal {
    Principal::manager(7, "Awa", "niger", vec![RoleId(2)])
}

/// Role list fixture: the system superuser role plus one delegated role per
/// filiale
pub fn roles_json() -> Value {
    json!([
        {
            "id": 1,
            "name": "ADMIN",
            "description": "Superuser role",
            "is_system": true,
            "created_by": null
        },
        {
            "id": 2,
            "name": "NIGER-DEV",
            "description": "Niger developers",
            "is_system": false,
            "created_by": 7
        },
        {
            "id": 3,
            "name": "BENIN-DEV",
            "description": "Benin developers",
            "is_system": false,
            "created_by": 8
        }
    ])
}

/// Permission catalog fixture spanning three modules
pub fn catalog_json() -> Value {
    json!([
        { "code": "tickets.view",   "module": "tickets", "name": "View tickets" },
        { "code": "tickets.update", "module": "tickets", "name": "Update tickets" },
        { "code": "tickets.delete", "module": "tickets", "name": "Delete tickets" },
        { "code": "assets.view",    "module": "assets",  "name": "View assets" },
        { "code": "assets.delete",  "module": "assets",  "name": "Delete assets" },
        { "code": "roles.view_permissions", "module": "roles", "name": "View assigned permissions" }
    ])
}

/// Build an [`ApiClient`] pointed at the mock server
pub fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout: 5,
        auth_token: None,
    })
    .expect("client construction")
}

/// Mount a principal's held-permissions endpoint
pub async fn mount_held_permissions(server: &MockServer, principal_id: i64, held: &[&str]) {
    Mock::given(method("GET"))
        .and(path(format!("/api/principals/{}/permissions", principal_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(held)))
        .mount(server)
        .await;
}

/// Mount the fetches every console load performs: role list, catalog, and
/// principal 7's held permissions
pub async fn mount_load(server: &MockServer, held: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(roles_json()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json()))
        .mount(server)
        .await;
    mount_held_permissions(server, 7, held).await;
}

/// Mount the editor-open fetches: principal 7's delegable codes and role 2's
/// current assignment
pub async fn mount_editor_open(server: &MockServer, delegable: &[&str], role2_assigned: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/api/principals/7/delegable-permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(delegable)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/roles/2/permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(role2_assigned)))
        .mount(server)
        .await;
}
