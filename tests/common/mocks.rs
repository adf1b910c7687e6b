//! Shared mock implementations for testing
//!
//! This module provides consistent mock implementations that can be used
//! across different test modules to avoid duplication. Both mocks record the
//! calls they receive so tests can assert on interaction, not just results.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use atelier_projects::domain::project::ProjectDetails;
use atelier_projects::domain::typing::{TypeCandidate, TypeEstimate};
use atelier_projects::infrastructure::api_clients::{
    ProbeError, ProjectRegistryClient, RegistryError, TypeProbeClient,
};

/// Mock type probe client with canned candidates and per-type estimates.
pub struct MockProbeClient {
    candidates: Result<Vec<TypeCandidate>, ProbeError>,
    estimates: HashMap<String, Result<TypeEstimate, ProbeError>>,
    resolve_calls: Mutex<Vec<String>>,
    estimate_calls: Mutex<Vec<(String, String)>>,
}

impl MockProbeClient {
    /// Create a mock that reports the given candidates.
    pub fn new(candidates: Vec<TypeCandidate>) -> Self {
        Self {
            candidates: Ok(candidates),
            estimates: HashMap::new(),
            resolve_calls: Mutex::new(Vec::new()),
            estimate_calls: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock whose candidate scan always fails.
    pub fn failing() -> Self {
        Self {
            candidates: Err(ProbeError::Http {
                message: "mock resolve failure".to_string(),
                status: Some(500),
            }),
            estimates: HashMap::new(),
            resolve_calls: Mutex::new(Vec::new()),
            estimate_calls: Mutex::new(Vec::new()),
        }
    }

    /// Canned estimate for one candidate type.
    pub fn with_estimate(mut self, type_id: &str, estimate: TypeEstimate) -> Self {
        self.estimates.insert(type_id.to_string(), Ok(estimate));
        self
    }

    /// Make the estimate for one candidate type fail.
    pub fn with_failing_estimate(mut self, type_id: &str) -> Self {
        self.estimates.insert(
            type_id.to_string(),
            Err(ProbeError::Http {
                message: format!("mock estimate failure for {type_id}"),
                status: Some(500),
            }),
        );
        self
    }

    pub fn resolve_call_count(&self) -> usize {
        self.resolve_calls.lock().unwrap().len()
    }

    /// Every (path, type) pair an estimate was requested for, in call order.
    pub fn estimate_calls(&self) -> Vec<(String, String)> {
        self.estimate_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TypeProbeClient for MockProbeClient {
    async fn resolve_candidates(&self, path: &str) -> Result<Vec<TypeCandidate>, ProbeError> {
        self.resolve_calls.lock().unwrap().push(path.to_string());
        self.candidates.clone()
    }

    async fn estimate(&self, path: &str, type_id: &str) -> Result<TypeEstimate, ProbeError> {
        self.estimate_calls
            .lock()
            .unwrap()
            .push((path.to_string(), type_id.to_string()));
        self.estimates
            .get(type_id)
            .cloned()
            // an unknown type simply reports no attributes
            .unwrap_or_else(|| Ok(TypeEstimate::default()))
    }
}

/// Mock project registry that echoes bodies back and records every call.
pub struct MockRegistryClient {
    update_errors: Mutex<VecDeque<RegistryError>>,
    canned_details: Option<ProjectDetails>,
    updates: Mutex<Vec<(String, ProjectDetails)>>,
    imports: Mutex<Vec<(String, ProjectDetails)>>,
}

impl MockRegistryClient {
    /// Create a mock where every operation succeeds.
    pub fn new() -> Self {
        Self {
            update_errors: Mutex::new(VecDeque::new()),
            canned_details: None,
            updates: Mutex::new(Vec::new()),
            imports: Mutex::new(Vec::new()),
        }
    }

    /// Fail the next update calls with the given errors, in order; once the
    /// queue is drained, updates succeed again.
    pub fn with_update_errors(self, errors: Vec<RegistryError>) -> Self {
        *self.update_errors.lock().unwrap() = errors.into();
        self
    }

    /// Canned response for `details`.
    pub fn with_details(mut self, details: ProjectDetails) -> Self {
        self.canned_details = Some(details);
        self
    }

    /// Every update received, as (path, transmitted body) in call order.
    pub fn updates(&self) -> Vec<(String, ProjectDetails)> {
        self.updates.lock().unwrap().clone()
    }

    pub fn update_call_count(&self) -> usize {
        self.updates.lock().unwrap().len()
    }

    /// Every import received, as (path, transmitted body) in call order.
    pub fn imports(&self) -> Vec<(String, ProjectDetails)> {
        self.imports.lock().unwrap().clone()
    }
}

impl Default for MockRegistryClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProjectRegistryClient for MockRegistryClient {
    async fn import(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        self.imports
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        Ok(body.clone())
    }

    async fn create(
        &self,
        _path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        Ok(body.clone())
    }

    async fn create_batch(
        &self,
        bodies: &[ProjectDetails],
    ) -> Result<Vec<ProjectDetails>, RegistryError> {
        Ok(bodies.to_vec())
    }

    async fn details(&self, path: &str) -> Result<ProjectDetails, RegistryError> {
        self.canned_details
            .clone()
            .ok_or_else(|| RegistryError::NotFound {
                path: path.to_string(),
            })
    }

    async fn update(
        &self,
        path: &str,
        body: &ProjectDetails,
    ) -> Result<ProjectDetails, RegistryError> {
        self.updates
            .lock()
            .unwrap()
            .push((path.to_string(), body.clone()));
        match self.update_errors.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(body.clone()),
        }
    }

    async fn remove(&self, _path: &str) -> Result<(), RegistryError> {
        Ok(())
    }

    async fn rename(&self, _path: &str, _new_name: &str) -> Result<(), RegistryError> {
        Ok(())
    }
}
