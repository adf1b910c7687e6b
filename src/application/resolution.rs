//! Project-type resolution service
//!
//! Given an imported project with no type yet, scan it for candidate types,
//! estimate attributes for every candidate eligible as a final type, pick the
//! winner, and commit it back to the registry. Resolution itself never
//! mutates the caller's project details; it returns an updated copy together
//! with the outcome.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, info, warn};

use crate::domain::project::{Attributes, ProjectDetails, ProjectImport};
use crate::domain::typing::{
    select_matching_type, ResolutionOutcome, TypeCatalog, BLANK_TYPE,
};
use crate::infrastructure::api_clients::{
    ProbeError, ProjectRegistryClient, RegistryError, TypeProbeClient,
};
use crate::infrastructure::cache::ProjectStore;

/// Error surfaced by [`TypeResolutionService`].
#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    /// A resolve or estimate probe failed. Probes are never retried.
    #[error("type probe failed: {0}")]
    Probe(#[from] ProbeError),

    /// The project could not be persisted, including the one retry with the
    /// blank fallback type; carries the most recent registry error.
    #[error("project update failed: {0}")]
    Commit(#[from] RegistryError),
}

/// Decides a project's type from the agent's probes and commits it.
pub struct TypeResolutionService {
    probe: Arc<dyn TypeProbeClient>,
    registry: Arc<dyn ProjectRegistryClient>,
    store: Option<Arc<ProjectStore>>,
}

impl TypeResolutionService {
    pub fn new(probe: Arc<dyn TypeProbeClient>, registry: Arc<dyn ProjectRegistryClient>) -> Self {
        Self {
            probe,
            registry,
            store: None,
        }
    }

    /// Record probe results in a session store as they are observed.
    pub fn with_store(mut self, store: Arc<ProjectStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Determine the project type for an imported project.
    ///
    /// Returns the updated project details together with the outcome. The
    /// input is not modified; callers that accept the outcome should carry
    /// the returned details forward (and typically pass both to [`commit`]).
    ///
    /// [`commit`]: TypeResolutionService::commit
    pub async fn resolve(
        &self,
        import: &ProjectImport,
        catalog: &TypeCatalog,
    ) -> Result<(ProjectDetails, ResolutionOutcome), ResolutionError> {
        let mut details = import.project.clone();

        if details.is_typed() {
            return Ok((details, ResolutionOutcome::AlreadyTyped));
        }

        if details.attributes.is_none() {
            details.source = Some(import.source.clone());
            details.attributes = Some(Attributes::new());
        }

        let candidates = self.probe.resolve_candidates(&details.name).await?;
        if let Some(store) = &self.store {
            store.record_candidates(&details.name, &candidates).await;
        }

        let attributes = details.attributes.get_or_insert_with(Attributes::new);
        let mut estimate_types: Vec<String> = Vec::new();
        for candidate in &candidates {
            // merge partial candidate attributes; on collision the later
            // candidate wins
            for (key, value) in &candidate.attributes {
                attributes.insert(key.clone(), value.clone());
            }
            if catalog.is_primaryable(&candidate.type_id) {
                estimate_types.push(candidate.type_id.clone());
            }
        }

        if estimate_types.is_empty() {
            info!(project = %details.name, "no primaryable type candidates, leaving project untyped");
            return Ok((details, ResolutionOutcome::Unresolvable));
        }

        debug!(project = %details.name, types = ?estimate_types, "estimating candidate types");
        let estimates = try_join_all(
            estimate_types
                .iter()
                .map(|type_id| self.probe.estimate(&details.name, type_id)),
        )
        .await?;

        if let Some(store) = &self.store {
            for (type_id, estimate) in estimate_types.iter().zip(&estimates) {
                store.record_estimate(&details.name, type_id, estimate).await;
            }
        }

        // keep only non-empty estimates, in evaluation order
        let by_matching_type: Vec<(String, Attributes)> = estimate_types
            .into_iter()
            .zip(estimates)
            .filter(|(_, estimate)| !estimate.attributes.is_empty())
            .map(|(type_id, estimate)| (type_id, estimate.attributes))
            .collect();

        match select_matching_type(&by_matching_type, catalog) {
            Some(type_id) => {
                let attributes = by_matching_type
                    .iter()
                    .find(|(t, _)| *t == type_id)
                    .map(|(_, a)| a.clone())
                    .unwrap_or_default();

                info!(project = %details.name, project_type = %type_id, "project type resolved");
                details.type_id = Some(type_id.clone());
                details.attributes = Some(attributes.clone());
                Ok((
                    details,
                    ResolutionOutcome::Resolved {
                        type_id,
                        attributes,
                    },
                ))
            }
            None => {
                info!(project = %details.name, "no estimate matched, leaving project untyped");
                Ok((details, ResolutionOutcome::Unresolvable))
            }
        }
    }

    /// Persist a resolution outcome.
    ///
    /// An already-typed project is re-saved as is. A resolved project is
    /// updated once; if that update fails, a single retry downgrades the
    /// project to the blank type with empty attributes, and a second failure
    /// is surfaced. An unresolvable outcome performs no registry call.
    pub async fn commit(
        &self,
        details: &ProjectDetails,
        outcome: &ResolutionOutcome,
    ) -> Result<ProjectDetails, ResolutionError> {
        match outcome {
            ResolutionOutcome::Unresolvable => Ok(details.clone()),
            ResolutionOutcome::AlreadyTyped => {
                let updated = self
                    .registry
                    .update(&details.name, &details.for_update())
                    .await?;
                Ok(updated)
            }
            ResolutionOutcome::Resolved { .. } => {
                match self
                    .registry
                    .update(&details.name, &details.for_update())
                    .await
                {
                    Ok(updated) => Ok(updated),
                    Err(error) => {
                        warn!(
                            project = %details.name,
                            error = %error,
                            "project update failed, retrying with the blank type"
                        );
                        let mut fallback = details.clone();
                        fallback.type_id = Some(BLANK_TYPE.to_string());
                        fallback.attributes = Some(Attributes::new());
                        let updated = self
                            .registry
                            .update(&fallback.name, &fallback.for_update())
                            .await?;
                        Ok(updated)
                    }
                }
            }
        }
    }

    /// Resolve a project's type and commit the result in one call.
    pub async fn resolve_and_commit(
        &self,
        import: &ProjectImport,
        catalog: &TypeCatalog,
    ) -> Result<(ProjectDetails, ResolutionOutcome), ResolutionError> {
        let (details, outcome) = self.resolve(import, catalog).await?;
        let committed = self.commit(&details, &outcome).await?;
        Ok((committed, outcome))
    }
}
