//! Backend client integration tests

use crate::common;
use helpdesk_console::{ConsoleBackend, ConsoleError, PermissionCode, PrincipalId, RoleId};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_catalog_round_trip() {
    let server = MockServer::start().await;
    common::mount_load(&server, &[]).await;

    let client = common::client(&server);
    let catalog = client.permission_catalog().await.unwrap();
    assert_eq!(catalog.len(), 6);
    assert!(
        catalog
            .iter()
            .any(|p| p.code == PermissionCode::from("assets.delete") && p.module == "assets")
    );
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/roles"))
        .and(header("authorization", "Bearer sekret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::roles_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = helpdesk_console::ApiClient::new(helpdesk_console::ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout: 5,
        auth_token: Some("sekret".to_string()),
    })
    .unwrap();

    client.list_roles().await.unwrap();
}

#[tokio::test]
async fn test_delegable_endpoint_is_principal_scoped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/principals/42/delegable-permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["tickets.view"])))
        .expect(1)
        .mount(&server)
        .await;

    let codes = common::client(&server)
        .delegable_permissions(PrincipalId(42))
        .await
        .unwrap();
    assert_eq!(codes, vec![PermissionCode::from("tickets.view")]);
}

#[tokio::test]
async fn test_validation_rejection_surfaces_server_reason() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/roles/2/permissions"))
        .and(body_json(json!(["tickets.view"])))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "message": "permission outside delegation authority" })),
        )
        .mount(&server)
        .await;

    let err = common::client(&server)
        .replace_role_permissions(RoleId(2), vec![PermissionCode::from("tickets.view")])
        .await
        .unwrap_err();

    match err {
        ConsoleError::Api { status, reason } => {
            assert_eq!(status, 422);
            assert_eq!(reason, "permission outside delegation authority");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_role_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/roles/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    common::client(&server).delete_role(RoleId(2)).await.unwrap();
}
