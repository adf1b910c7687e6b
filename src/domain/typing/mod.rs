//! Project typing domain module
//!
//! The type catalog describes every project type the workspace agent knows
//! about; candidates and estimates are what the agent's probes report for a
//! concrete project. `select_matching_type` holds the tie-break rules applied
//! once all estimates are in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::project::Attributes;

/// Fallback type assigned when a resolved type cannot be persisted.
pub const BLANK_TYPE: &str = "blank";

/// Descriptor of a single project type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Whether this type may become a project's final type, as opposed to a
    /// purely informational parent type.
    #[serde(default)]
    pub primaryable: bool,
    /// Ancestor type identifiers, most specific first.
    #[serde(default)]
    pub parents: Vec<String>,
}

/// Read-only lookup of type descriptors by type identifier.
///
/// The catalog is supplied by the caller (typically fetched once per
/// workspace) and never mutated during a resolution.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: HashMap<String, TypeDescriptor>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_id: impl Into<String>, descriptor: TypeDescriptor) {
        self.types.insert(type_id.into(), descriptor);
    }

    pub fn get(&self, type_id: &str) -> Option<&TypeDescriptor> {
        self.types.get(type_id)
    }

    /// Whether the given type is known and eligible as a final project type.
    pub fn is_primaryable(&self, type_id: &str) -> bool {
        self.get(type_id).map(|d| d.primaryable).unwrap_or(false)
    }
}

impl FromIterator<(String, TypeDescriptor)> for TypeCatalog {
    fn from_iter<I: IntoIterator<Item = (String, TypeDescriptor)>>(iter: I) -> Self {
        Self {
            types: iter.into_iter().collect(),
        }
    }
}

/// One guess at a project's type, produced by inspecting project content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeCandidate {
    #[serde(rename = "type")]
    pub type_id: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: Attributes,
}

/// Attribute set reported by the deeper, type-specific probe run for a
/// single (project, candidate type) pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeEstimate {
    #[serde(default)]
    pub attributes: Attributes,
}

/// Terminal outcome of one type resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    /// The project already carried a type; nothing was probed.
    AlreadyTyped,
    /// A type was selected together with its estimated attributes.
    Resolved {
        type_id: String,
        attributes: Attributes,
    },
    /// No type could be determined. Not an error: the project simply stays
    /// untyped until the caller decides otherwise.
    Unresolvable,
}

/// A parent override applied during selection: when the winning candidate
/// descends from `parent` and an estimate for `preferred` is also present,
/// the project is classified as `preferred` instead.
struct ParentOverride {
    parent: &'static str,
    preferred: &'static str,
}

/// The single known override: a Java project that also matches Maven is a
/// Maven project. Deliberately a table of one row, not inheritance logic.
const PARENT_OVERRIDES: [ParentOverride; 1] = [ParentOverride {
    parent: "java",
    preferred: "maven",
}];

fn has_estimate(by_type: &[(String, Attributes)], type_id: &str) -> bool {
    by_type.iter().any(|(t, _)| t == type_id)
}

/// Pick the winning type among the candidates that produced a non-empty
/// estimate, in the order the estimates were evaluated.
///
/// The first entry wins. If its descriptor names parents, each parent is
/// considered in order: a parent override can redirect the choice (and may do
/// so even after a provisional winner was set on an earlier parent), otherwise
/// the first parent with its own estimate replaces the candidate, and a parent
/// without one leaves the candidate in place. Later entries are never
/// reconsidered once a winner exists.
pub fn select_matching_type(
    by_type: &[(String, Attributes)],
    catalog: &TypeCatalog,
) -> Option<String> {
    let (first_type, _) = by_type.first()?;

    let parents = catalog
        .get(first_type)
        .map(|d| d.parents.as_slice())
        .unwrap_or_default();
    if parents.is_empty() {
        return Some(first_type.clone());
    }

    let mut winner: Option<String> = None;
    for parent in parents {
        for rule in &PARENT_OVERRIDES {
            if parent == rule.parent && has_estimate(by_type, rule.preferred) {
                winner = Some(rule.preferred.to_string());
            }
        }
        if winner.is_none() {
            winner = Some(if has_estimate(by_type, parent) {
                parent.clone()
            } else {
                first_type.clone()
            });
        }
    }
    winner
}
