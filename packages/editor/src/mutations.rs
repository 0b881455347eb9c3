//! # Document Mutations
//!
//! High-level semantic operations on profile documents.
//!
//! ## Design Principles
//!
//! 1. **Pure**: a mutation reads a document and returns a new one; the input
//!    is never modified, so history snapshots stay valid
//! 2. **Validated**: every mutation checks ids, field keys and field
//!    constraints before producing a result
//! 3. **Atomic**: on error nothing changes
//!
//! ## Mutation Semantics
//!
//! ### AddSection
//! - Position is clamped to `[0, len]`
//! - New instance gets a fresh id and no values (fields use defaults)
//!
//! ### ReorderSections
//! - Order must be a permutation of the current instance ids
//!
//! ### UpdateFieldValue
//! - Field must be declared by the section's component
//! - Value must satisfy the field's constraint
//!
//! ### ReplaceComponent
//! - Values whose key the new component also declares are carried over,
//!   without re-checking them against the new field's constraint
//! - Values for keys the new component lacks are dropped
//! - Nothing is synthesized for fields only the new component has

use crate::composer;
use profilekit_catalog::ComponentLookup;
use profilekit_document::Document;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Insert a new section for a catalog component
    #[serde(rename_all = "camelCase")]
    AddSection {
        component_id: String,
        #[serde(default = "end_of_document")]
        position: usize,
    },

    /// Remove a section instance
    #[serde(rename_all = "camelCase")]
    RemoveSection { section_id: String },

    /// Put sections in the given order
    #[serde(rename_all = "camelCase")]
    ReorderSections { order: Vec<String> },

    /// Set one field value of a section
    #[serde(rename_all = "camelCase")]
    UpdateFieldValue {
        section_id: String,
        field: String,
        value: String,
    },

    /// Swap the component behind a section, keeping shared field values
    #[serde(rename_all = "camelCase")]
    ReplaceComponent {
        section_id: String,
        component_id: String,
    },
}

fn end_of_document() -> usize {
    usize::MAX
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Unknown archetype: {0}")]
    UnknownArchetype(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Template '{template_id}' is not compatible with archetype '{archetype_id}'")]
    IncompatibleTemplate {
        template_id: String,
        archetype_id: String,
    },

    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),

    #[error("Component '{component_id}' has no field '{field}'")]
    UnknownField { component_id: String, field: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidFieldValue { field: String, reason: String },

    #[error("Invalid section order: {0}")]
    InvalidPermutation(String),

    #[error("No section ids left in this document")]
    IdsExhausted,
}

impl Mutation {
    /// Apply mutation to a document, producing the next document
    pub fn apply<C>(&self, doc: &Document, components: &C) -> Result<Document, MutationError>
    where
        C: ComponentLookup + ?Sized,
    {
        match self {
            Mutation::AddSection { component_id, position } => {
                composer::add_section(doc, components, component_id, *position)
            }

            Mutation::RemoveSection { section_id } => composer::remove_section(doc, section_id),

            Mutation::ReorderSections { order } => composer::reorder_sections(doc, order),

            Mutation::UpdateFieldValue { section_id, field, value } => {
                composer::update_field_value(doc, components, section_id, field, value)
            }

            Mutation::ReplaceComponent { section_id, component_id } => {
                composer::replace_component(doc, components, section_id, component_id)
            }
        }
    }

    /// Short human description, used as the undo/redo label
    pub fn describe(&self) -> String {
        match self {
            Mutation::AddSection { component_id, .. } => format!("Add {}", component_id),
            Mutation::RemoveSection { section_id } => format!("Remove section {}", section_id),
            Mutation::ReorderSections { .. } => "Reorder sections".to_string(),
            Mutation::UpdateFieldValue { field, .. } => format!("Edit {}", field),
            Mutation::ReplaceComponent { component_id, .. } => {
                format!("Switch to {}", component_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateFieldValue {
            section_id: "abc-1".to_string(),
            field: "title".to_string(),
            value: "Hello World".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        assert!(json.contains("\"type\":\"updateFieldValue\""));
        assert!(json.contains("\"sectionId\":\"abc-1\""));

        let deserialized: Mutation = serde_json::from_str(&json).unwrap();
        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_add_section_position_defaults_to_end() {
        let json = r#"{ "type": "addSection", "componentId": "quote" }"#;
        let mutation: Mutation = serde_json::from_str(json).unwrap();

        assert_eq!(
            mutation,
            Mutation::AddSection {
                component_id: "quote".to_string(),
                position: usize::MAX,
            }
        );
    }

    #[test]
    fn test_describe() {
        let mutation = Mutation::ReplaceComponent {
            section_id: "abc-1".to_string(),
            component_id: "header-minimal".to_string(),
        };
        assert_eq!(mutation.describe(), "Switch to header-minimal");
    }
}
