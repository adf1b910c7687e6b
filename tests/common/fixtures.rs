//! Fixture builders shared across the integration tests.

use std::collections::HashMap;

use atelier_projects::domain::project::{
    AttributeValue, Attributes, ProjectDetails, ProjectImport, ProjectSource,
};
use atelier_projects::domain::typing::{TypeCandidate, TypeCatalog, TypeDescriptor, TypeEstimate};

pub fn attrs(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), AttributeValue::from(*value)))
        .collect()
}

pub fn candidate(type_id: &str) -> TypeCandidate {
    TypeCandidate {
        type_id: type_id.to_string(),
        attributes: Attributes::new(),
    }
}

pub fn candidate_with_attrs(type_id: &str, pairs: &[(&str, &str)]) -> TypeCandidate {
    TypeCandidate {
        type_id: type_id.to_string(),
        attributes: attrs(pairs),
    }
}

pub fn estimate(pairs: &[(&str, &str)]) -> TypeEstimate {
    TypeEstimate {
        attributes: attrs(pairs),
    }
}

/// Catalog from (type id, primaryable, parents) triples.
pub fn catalog(entries: &[(&str, bool, &[&str])]) -> TypeCatalog {
    entries
        .iter()
        .map(|(id, primaryable, parents)| {
            (
                id.to_string(),
                TypeDescriptor {
                    primaryable: *primaryable,
                    parents: parents.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

/// An import for a project that has neither type nor attributes yet.
pub fn unresolved_import(name: &str) -> ProjectImport {
    ProjectImport {
        project: ProjectDetails::named(name),
        source: ProjectSource {
            source_type: Some("git".to_string()),
            location: Some(format!("https://example.com/{name}.git")),
            parameters: HashMap::new(),
        },
    }
}
