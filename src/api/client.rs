//! `reqwest`-based backend client

use super::backend::ConsoleBackend;
use super::types::{ApiErrorBody, CreateRoleRequest, UpdateRoleRequest};
use crate::config::ApiConfig;
use crate::rbac::{Permission, PermissionCode, PrincipalId, Role, RoleId};
use crate::utils::error::{ConsoleError, Result};
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP client for the console's REST backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http_client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from API settings
    pub fn new(config: ApiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ConsoleError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            base_url,
        })
    }

    /// Get configuration
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        // Url::join treats a base without a trailing slash as a file; build
        // the path by hand so "/api" + "roles" becomes "/api/roles".
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ConsoleError::Config("api.base_url cannot be a base".to_string()))?;
            segments.pop_if_empty();
            for segment in path.split('/').filter(|s| !s.is_empty()) {
                segments.push(segment);
            }
        }
        Ok(url)
    }

    fn request(&self, method: reqwest::Method, url: Url) -> reqwest::RequestBuilder {
        let mut builder = self.http_client.request(method, url);
        if let Some(token) = &self.config.auth_token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Map non-success responses onto the error taxonomy, preserving the
    /// server-reported reason.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let reason = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    body
                }
            });

        Err(match status {
            StatusCode::NOT_FOUND => ConsoleError::NotFound(reason),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ConsoleError::Authorization(reason)
            }
            _ => ConsoleError::api(status.as_u16(), reason),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);
        let response = self.request(reqwest::Method::GET, url).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);
        let response = self
            .request(reqwest::Method::POST, url)
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint(path)?;
        debug!("PUT {}", url);
        let response = self
            .request(reqwest::Method::PUT, url)
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        debug!("DELETE {}", url);
        let response = self.request(reqwest::Method::DELETE, url).send().await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[async_trait]
impl ConsoleBackend for ApiClient {
    async fn list_roles(&self) -> Result<Vec<Role>> {
        self.get_json("roles").await
    }

    async fn permission_catalog(&self) -> Result<Vec<Permission>> {
        self.get_json("permissions").await
    }

    async fn role_permissions(&self, role_id: RoleId) -> Result<Vec<PermissionCode>> {
        self.get_json(&format!("roles/{}/permissions", role_id)).await
    }

    async fn principal_permissions(
        &self,
        principal_id: PrincipalId,
    ) -> Result<Vec<PermissionCode>> {
        self.get_json(&format!("principals/{}/permissions", principal_id))
            .await
    }

    async fn delegable_permissions(
        &self,
        principal_id: PrincipalId,
    ) -> Result<Vec<PermissionCode>> {
        self.get_json(&format!("principals/{}/delegable-permissions", principal_id))
            .await
    }

    async fn replace_role_permissions(
        &self,
        role_id: RoleId,
        codes: Vec<PermissionCode>,
    ) -> Result<Vec<PermissionCode>> {
        self.put_json(&format!("roles/{}/permissions", role_id), &codes)
            .await
    }

    async fn create_role(&self, request: CreateRoleRequest) -> Result<Role> {
        self.post_json("roles", &request).await
    }

    async fn update_role(&self, role_id: RoleId, request: UpdateRoleRequest) -> Result<Role> {
        self.put_json(&format!("roles/{}", role_id), &request).await
    }

    async fn delete_role(&self, role_id: RoleId) -> Result<()> {
        self.delete(&format!("roles/{}", role_id)).await
    }
}
