//! Application services
//!
//! Orchestration over the domain models and the agent API clients: project
//! lifecycle plumbing in [`projects`], the type resolution engine and its
//! commit step in [`resolution`].

pub mod projects;
pub mod resolution;

pub use projects::ProjectService;
pub use resolution::{ResolutionError, TypeResolutionService};
