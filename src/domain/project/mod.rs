//! Project domain module
//!
//! Defines the project details shape exchanged with the workspace agent's
//! project API, along with the import descriptor that accompanies a project
//! until its type has been resolved.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single project attribute value as the agent API serializes it.
///
/// The API is inconsistent here: some attributes arrive as a plain string,
/// others as a list of strings. The resolver treats both as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        AttributeValue::Many(values)
    }
}

/// Project attributes keyed by attribute name.
pub type Attributes = HashMap<String, AttributeValue>;

/// Import descriptor for a project: where the content comes from.
///
/// Opaque to type resolution; it is copied onto the project details the
/// first time the attributes map is initialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSource {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
}

/// Project metadata as persisted by the workspace agent.
///
/// Also used as the request body for import/create/update calls; the wire
/// format is the same project config shape in every direction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub name: String,
    #[serde(default)]
    pub path: String,
    /// Resolved project type; `None` or empty means the type is still unknown.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ProjectSource>,
    /// Which workspace the details were fetched for. Local bookkeeping only,
    /// never part of the persisted project metadata.
    #[serde(skip)]
    pub workspace_id: Option<String>,
}

impl ProjectDetails {
    /// Minimal details for a project known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: format!("/{name}"),
            name,
            ..Self::default()
        }
    }

    /// Whether a project type has already been assigned.
    pub fn is_typed(&self) -> bool {
        self.type_id.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Copy prepared for an update call, with the workspace id bookkeeping
    /// cleared so it cannot leak into the transmitted body.
    pub fn for_update(&self) -> ProjectDetails {
        let mut copy = self.clone();
        copy.workspace_id = None;
        copy
    }
}

/// An imported project that has not been committed yet: the project details
/// paired with the import descriptor they came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectImport {
    pub project: ProjectDetails,
    pub source: ProjectSource,
}

/// Strip the leading separator the agent API rejects in path parameters.
pub fn normalized_path(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}
