//! Project lifecycle service
//!
//! Thin orchestration over the project registry: import, create, fetch,
//! update, rename, remove. Fetched details are tagged with the workspace they
//! belong to and recorded in the session store; the tag is local bookkeeping
//! and is stripped again before anything is written back.

use std::sync::Arc;

use tracing::debug;

use crate::domain::project::ProjectDetails;
use crate::infrastructure::api_clients::{ProjectRegistryClient, RegistryError};
use crate::infrastructure::cache::ProjectStore;

pub struct ProjectService {
    registry: Arc<dyn ProjectRegistryClient>,
    store: Arc<ProjectStore>,
}

impl ProjectService {
    pub fn new(registry: Arc<dyn ProjectRegistryClient>, store: Arc<ProjectStore>) -> Self {
        Self { registry, store }
    }

    /// Import a project from its source descriptor.
    ///
    /// The agent cannot persist a description for an untyped project, so the
    /// description is dropped from the body until a type is known.
    pub async fn import_project(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        let mut body = body.clone();
        if !body.is_typed() && body.description.is_some() {
            body.description = None;
        }
        self.registry.import(path, &body).await
    }

    pub async fn create_project(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        self.registry.create(path, body).await
    }

    /// Create a batch of projects in one agent call.
    pub async fn create_projects(
        &self,
        bodies: &[ProjectDetails],
    ) -> Result<Vec<ProjectDetails>, RegistryError> {
        self.registry.create_batch(bodies).await
    }

    /// Fetch one project's details, tag them with the owning workspace, and
    /// record them in the session store.
    pub async fn fetch_project_details(
        &self,
        workspace_id: &str,
        path: &str,
    ) -> Result<ProjectDetails, RegistryError> {
        let mut details = self.registry.details(path).await?;
        details.workspace_id = Some(workspace_id.to_string());
        self.store.record_details(path, &details).await;
        Ok(details)
    }

    /// Last fetched details for this path, if any.
    pub async fn project_details(&self, path: &str) -> Option<ProjectDetails> {
        self.store.details(path).await
    }

    /// Drop the recorded details for this path without touching the registry.
    pub async fn forget_project_details(&self, path: &str) {
        self.store.forget_details(path).await;
    }

    pub async fn update_project(
        &self,
        path: &str,
        details: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        debug!(path, "persisting project details");
        self.registry.update(path, &details.for_update()).await
    }

    pub async fn rename_project(&self, path: &str, new_name: &str) -> Result<(), RegistryError> {
        self.registry.rename(path, new_name).await
    }

    pub async fn remove_project(&self, path: &str) -> Result<(), RegistryError> {
        self.registry.remove(path).await
    }
}
