//! Core domain models
//!
//! Pure data and decision logic: project details as the agent API exposes
//! them, and the type catalog with the selection rules applied during
//! project-type resolution. Nothing in this layer performs I/O.

pub mod project;
pub mod typing;
