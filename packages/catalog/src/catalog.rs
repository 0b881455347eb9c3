//! # Catalog
//!
//! Id-indexed registries for every catalog collection.
//!
//! Entries are stored in insertion order (for listing) with a side index
//! from id to position (for lookup). Clients hold ids, not references.

use crate::definitions::{Archetype, ComponentDefinition, Identified, ResourceLink, Template};
use crate::error::CatalogError;
use crate::provider::{ComponentLookup, StarterLookup};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Ordered collection of entries addressable by id
#[derive(Debug, Clone)]
pub struct Registry<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Identified> Registry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build from a list, rejecting duplicate ids
    pub fn from_entries(entries: Vec<T>) -> Result<Self, CatalogError> {
        let mut registry = Self::new();
        for entry in entries {
            registry.insert(entry)?;
        }
        Ok(registry)
    }

    pub fn insert(&mut self, entry: T) -> Result<(), CatalogError> {
        if self.index.contains_key(entry.id()) {
            return Err(CatalogError::DuplicateId {
                kind: T::KIND,
                id: entry.id().to_string(),
            });
        }
        self.index.insert(entry.id().to_string(), self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Remove an entry by id, returning it
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.index.remove(id)?;
        let removed = self.entries.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Identified> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form of a catalog (`catalog.json`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    #[serde(default)]
    pub components: Vec<ComponentDefinition>,

    #[serde(default)]
    pub archetypes: Vec<Archetype>,

    #[serde(default)]
    pub templates: Vec<Template>,

    #[serde(default)]
    pub resources: Vec<ResourceLink>,
}

/// The full read-only catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    components: Registry<ComponentDefinition>,
    archetypes: Registry<Archetype>,
    templates: Registry<Template>,
    resources: Registry<ResourceLink>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_data(data: CatalogData) -> Result<Self, CatalogError> {
        let catalog = Self {
            components: Registry::from_entries(data.components)?,
            archetypes: Registry::from_entries(data.archetypes)?,
            templates: Registry::from_entries(data.templates)?,
            resources: Registry::from_entries(data.resources)?,
        };

        tracing::debug!(
            components = catalog.components.len(),
            archetypes = catalog.archetypes.len(),
            templates = catalog.templates.len(),
            resources = catalog.resources.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(source)?;
        Self::from_data(data)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Serialize back to the `catalog.json` shape
    pub fn to_data(&self) -> CatalogData {
        CatalogData {
            components: self.components.iter().cloned().collect(),
            archetypes: self.archetypes.iter().cloned().collect(),
            templates: self.templates.iter().cloned().collect(),
            resources: self.resources.iter().cloned().collect(),
        }
    }

    pub fn components(&self) -> &Registry<ComponentDefinition> {
        &self.components
    }

    pub fn components_mut(&mut self) -> &mut Registry<ComponentDefinition> {
        &mut self.components
    }

    pub fn archetypes(&self) -> &Registry<Archetype> {
        &self.archetypes
    }

    pub fn archetypes_mut(&mut self) -> &mut Registry<Archetype> {
        &mut self.archetypes
    }

    pub fn templates(&self) -> &Registry<Template> {
        &self.templates
    }

    pub fn templates_mut(&mut self) -> &mut Registry<Template> {
        &mut self.templates
    }

    pub fn resources(&self) -> &Registry<ResourceLink> {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut Registry<ResourceLink> {
        &mut self.resources
    }
}

impl ComponentLookup for Catalog {
    fn component(&self, id: &str) -> Option<&ComponentDefinition> {
        self.components.get(id)
    }
}

impl StarterLookup for Catalog {
    fn archetype(&self, id: &str) -> Option<&Archetype> {
        self.archetypes.get(id)
    }

    fn template(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    fn templates_compatible_with(&self, archetype_id: &str) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|template| template.is_compatible_with(archetype_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: &str) -> ResourceLink {
        ResourceLink {
            id: id.to_string(),
            name: id.to_uppercase(),
            description: String::new(),
            url: format!("https://example.com/{}", id),
            tags: vec![],
        }
    }

    #[test]
    fn test_registry_lookup_and_order() {
        let registry =
            Registry::from_entries(vec![resource("b"), resource("a"), resource("c")]).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("a").map(|r| r.name.as_str()), Some("A"));
        let ids: Vec<_> = registry.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let result = Registry::from_entries(vec![resource("a"), resource("a")]);
        match result {
            Err(CatalogError::DuplicateId { kind, id }) => {
                assert_eq!(kind, "resource");
                assert_eq!(id, "a");
            }
            other => panic!("Expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_registry_remove_reindexes() {
        let mut registry =
            Registry::from_entries(vec![resource("a"), resource("b"), resource("c")]).unwrap();

        assert!(registry.remove("a").is_some());
        assert!(registry.remove("a").is_none());
        assert_eq!(registry.get("c").map(|r| r.id.as_str()), Some("c"));
        assert_eq!(registry.get("b").map(|r| r.id.as_str()), Some("b"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_empty_catalog_from_json() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.components().is_empty());
        assert!(catalog.archetype("anything").is_none());
    }

    #[test]
    fn test_templates_compatible_with() {
        let json = r#"{
            "templates": [
                { "id": "t1", "name": "T1", "description": "", "icon": "", "category": "x", "archetypes": ["a"] },
                { "id": "t2", "name": "T2", "description": "", "icon": "", "category": "x", "archetypes": ["b", "a"] },
                { "id": "t3", "name": "T3", "description": "", "icon": "", "category": "x", "archetypes": ["b"] }
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();

        let ids: Vec<_> = catalog
            .templates_compatible_with("a")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }
}
