/*
 Infrastructure: Workspace Agent API Clients

 This module defines the abstractions used to talk to the workspace agent's
 project surface. Two concerns are kept separate even though one HTTP client
 serves both:

 - Project registry: import/create/details/update/remove/rename of persisted
   project metadata.
 - Type probe: the "resolve" candidate scan and the per-type "estimate"
   attribute probe used during project-type resolution.

 - Domain:    ProjectDetails / TypeCandidate / TypeEstimate live in crate::domain
 - Application: ProjectService and TypeResolutionService orchestrate calls to
   these traits
 - Infrastructure: WsAgentClient implements both traits below
*/

pub mod wsagent;

use async_trait::async_trait;

use crate::domain::project::ProjectDetails;
use crate::domain::typing::{TypeCandidate, TypeEstimate};

pub use wsagent::WsAgentClient;

/// Error type for project registry operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistryError {
    /// HTTP-level error reported by the agent (optional status code).
    #[error("project API HTTP error: {message}, status={status:?}")]
    Http {
        message: String,
        status: Option<u16>,
    },

    /// Project not found (or already deleted).
    #[error("project not found: {path}")]
    NotFound { path: String },

    /// Response body could not be decoded.
    #[error("project API parse error: {0}")]
    Parse(String),

    /// Connection-level failure before any response arrived.
    #[error("project API transport error: {0}")]
    Transport(String),
}

/// Error type for type probe operations. Probe calls are never retried; a
/// failed resolve or estimate fails the resolution that issued it.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProbeError {
    #[error("type probe HTTP error: {message}, status={status:?}")]
    Http {
        message: String,
        status: Option<u16>,
    },

    #[error("type probe parse error: {0}")]
    Parse(String),

    #[error("type probe transport error: {0}")]
    Transport(String),
}

/// Trait for persisted project metadata operations on the workspace agent.
///
/// All operations are asynchronous and surface agent/server failures as
/// [`RegistryError`]; none of them retry internally.
#[async_trait]
pub trait ProjectRegistryClient: Send + Sync {
    /// Import a project from its source descriptor.
    async fn import(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError>;

    /// Create a project at the given path.
    async fn create(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError>;

    /// Create several projects in one call.
    async fn create_batch(
        &self,
        bodies: &[ProjectDetails],
    ) -> Result<Vec<ProjectDetails>, RegistryError>;

    /// Fetch the persisted details of one project.
    async fn details(&self, path: &str) -> Result<ProjectDetails, RegistryError>;

    /// Replace the persisted details of one project.
    async fn update(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError>;

    /// Delete a project.
    async fn remove(&self, path: &str) -> Result<(), RegistryError>;

    /// Rename a project.
    async fn rename(&self, path: &str, new_name: &str) -> Result<(), RegistryError>;
}

/// Trait for the content probes used during project-type resolution.
#[async_trait]
pub trait TypeProbeClient: Send + Sync {
    /// Scan project content for type candidates. May legitimately return an
    /// empty list for content the agent cannot classify.
    async fn resolve_candidates(&self, path: &str) -> Result<Vec<TypeCandidate>, ProbeError>;

    /// Run the deeper, type-specific attribute probe for one candidate type.
    async fn estimate(&self, path: &str, type_id: &str) -> Result<TypeEstimate, ProbeError>;
}
