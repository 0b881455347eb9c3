//! # Catalog Definitions
//!
//! Immutable descriptions of components, archetypes, templates and resource
//! links. These are the shapes stored in `catalog.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anything stored in a [`Registry`](crate::Registry) by id
pub trait Identified {
    /// Collection name used in error messages ("component", "template", ...)
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Value kind of a field (all values are stored as text)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Enum,
    Boolean,
    Number,
}

/// Validation constraint attached to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldConstraint {
    /// Value must contain at least one non-whitespace character
    NonEmpty,

    /// Value must be one of an allowed set
    OneOf { values: Vec<String> },

    /// Value must not exceed `max` characters
    MaxLength { max: usize },

    /// Value must parse as a number
    Numeric,

    /// Value must be `true` or `false`
    Boolean,
}

impl FieldConstraint {
    /// Check a value, returning the reason it was rejected
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self {
            FieldConstraint::NonEmpty => {
                if value.trim().is_empty() {
                    Err("value must not be empty".to_string())
                } else {
                    Ok(())
                }
            }
            FieldConstraint::OneOf { values } => {
                if values.iter().any(|allowed| allowed == value) {
                    Ok(())
                } else {
                    Err(format!("value must be one of: {}", values.join(", ")))
                }
            }
            FieldConstraint::MaxLength { max } => {
                let len = value.chars().count();
                if len > *max {
                    Err(format!("value is {} characters, maximum is {}", len, max))
                } else {
                    Ok(())
                }
            }
            FieldConstraint::Numeric => value
                .trim()
                .parse::<f64>()
                .map(|_| ())
                .map_err(|_| format!("'{}' is not a number", value)),
            FieldConstraint::Boolean => match value {
                "true" | "false" => Ok(()),
                _ => Err(format!("'{}' is not true or false", value)),
            },
        }
    }
}

/// One parameter of a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Stable key, unique within the component
    pub key: String,

    /// Human label
    pub label: String,

    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<FieldConstraint>,
}

impl FieldDefinition {
    /// Validate a value against this field's constraint (if any)
    pub fn check(&self, value: &str) -> Result<(), String> {
        match &self.constraint {
            Some(constraint) => constraint.check(value),
            None => Ok(()),
        }
    }

    /// Default value, or empty text when none is declared
    pub fn default_value(&self) -> &str {
        self.default.as_deref().unwrap_or("")
    }
}

/// A reusable, parameterized content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,

    /// Ordered field definitions
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,

    /// Render template with `{{field}}` and `{{profileVariable}}` placeholders
    pub template: String,
}

impl ComponentDefinition {
    pub fn field(&self, key: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.key == key)
    }

    pub fn declares(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    /// Field key → default value, for every declared field
    pub fn defaults(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.key.clone(), field.default_value().to_string()))
            .collect()
    }
}

impl Identified for ComponentDefinition {
    const KIND: &'static str = "component";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Read-only section layout stored in archetypes and templates.
///
/// Same shape as a live section instance; copied (never aliased) when a
/// document is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSeed {
    pub id: String,
    pub component_id: String,

    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl SectionSeed {
    pub fn new(id: impl Into<String>, component_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_id: component_id.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// A curated starting layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub persona: String,
    pub glyph: String,

    #[serde(default)]
    pub sections: Vec<SectionSeed>,
}

impl Identified for Archetype {
    const KIND: &'static str = "archetype";

    fn id(&self) -> &str {
        &self.id
    }
}

/// A fully pre-filled example compatible with one or more archetypes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,

    #[serde(default)]
    pub tags: Vec<String>,

    pub icon: String,
    pub category: String,

    /// Ids of compatible archetypes
    pub archetypes: Vec<String>,

    #[serde(default)]
    pub sections: Vec<SectionSeed>,
}

impl Template {
    pub fn is_compatible_with(&self, archetype_id: &str) -> bool {
        self.archetypes.iter().any(|id| id == archetype_id)
    }
}

impl Identified for Template {
    const KIND: &'static str = "template";

    fn id(&self) -> &str {
        &self.id
    }
}

/// External link listed in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLink {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl Identified for ResourceLink {
    const KIND: &'static str = "resource";

    fn id(&self) -> &str {
        &self.id
    }
}
