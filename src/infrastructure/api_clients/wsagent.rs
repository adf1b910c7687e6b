//! Workspace agent project API client
//!
//! One HTTP client serves both the project registry operations and the type
//! probes; the agent exposes them under the same `/project` surface. Paths
//! are normalized before use because the agent rejects the leading separator
//! in path parameters.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::{ProbeError, ProjectRegistryClient, RegistryError, TypeProbeClient};
use crate::config::AgentConfig;
use crate::domain::project::{normalized_path, ProjectDetails};
use crate::domain::typing::{TypeCandidate, TypeEstimate};

const USER_AGENT: &str = concat!("atelier-projects/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the workspace agent's project API.
pub struct WsAgentClient {
    http: Client,
    base_url: String,
}

impl WsAgentClient {
    /// Create a new client for the agent at the configured base URL.
    pub fn new(config: &AgentConfig) -> Result<Self, RegistryError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn project_url(&self, path: &str) -> String {
        format!("{}/project/{}", self.base_url, normalized_path(path))
    }

    async fn send_registry(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let response = request
            .send()
            .await
            .map_err(|e| RegistryError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(RegistryError::Http {
                message,
                status: Some(status.as_u16()),
            });
        }
        Ok(response)
    }

    async fn read_registry<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, RegistryError> {
        self.send_registry(request, path)
            .await?
            .json::<T>()
            .await
            .map_err(|e| RegistryError::Parse(e.to_string()))
    }

    async fn read_probe<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ProbeError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProbeError::Http {
                message,
                status: Some(status.as_u16()),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProbeError::Parse(e.to_string()))
    }
}

#[async_trait]
impl ProjectRegistryClient for WsAgentClient {
    async fn import(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        let url = format!(
            "{}/project/import/{}",
            self.base_url,
            normalized_path(path)
        );
        debug!(%url, "importing project");
        self.read_registry(self.http.post(url).json(body), path)
            .await
    }

    async fn create(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        let url = format!("{}/project", self.base_url);
        self.read_registry(
            self.http
                .post(url)
                .query(&[("name", normalized_path(path))])
                .json(body),
            path,
        )
        .await
    }

    async fn create_batch(
        &self,
        bodies: &[ProjectDetails],
    ) -> Result<Vec<ProjectDetails>, RegistryError> {
        let url = format!("{}/project/batch", self.base_url);
        self.read_registry(self.http.post(url).json(bodies), "batch")
            .await
    }

    async fn details(&self, path: &str) -> Result<ProjectDetails, RegistryError> {
        self.read_registry(self.http.get(self.project_url(path)), path)
            .await
    }

    async fn update(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        debug!(path, "updating project");
        self.read_registry(self.http.put(self.project_url(path)).json(body), path)
            .await
    }

    async fn remove(&self, path: &str) -> Result<(), RegistryError> {
        self.send_registry(self.http.delete(self.project_url(path)), path)
            .await?;
        Ok(())
    }

    async fn rename(&self, path: &str, new_name: &str) -> Result<(), RegistryError> {
        let url = format!(
            "{}/project/rename/{}",
            self.base_url,
            normalized_path(path)
        );
        self.send_registry(self.http.post(url).query(&[("name", new_name)]), path)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TypeProbeClient for WsAgentClient {
    async fn resolve_candidates(&self, path: &str) -> Result<Vec<TypeCandidate>, ProbeError> {
        let url = format!(
            "{}/project/resolve/{}",
            self.base_url,
            normalized_path(path)
        );
        debug!(%url, "scanning project for type candidates");
        self.read_probe(self.http.get(url)).await
    }

    async fn estimate(&self, path: &str, type_id: &str) -> Result<TypeEstimate, ProbeError> {
        let url = format!(
            "{}/project/estimate/{}",
            self.base_url,
            normalized_path(path)
        );
        self.read_probe(self.http.get(url).query(&[("type", type_id)]))
            .await
    }
}
