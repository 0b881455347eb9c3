//! # Document
//!
//! Ordered section instances plus the origin they were created from.
//!
//! ## Sharing
//!
//! ```text
//!   v1: [A, B, C]          v2 = v1.with_section(1, B')
//!        │  │  │
//!   v2: [A, B', C]         A and C are the same Arc in both versions
//! ```
//!
//! None of the methods here take `&mut self`: each edit returns a new
//! document and leaves the receiver untouched.

use crate::id_generator::IdGenerator;
use crate::section::SectionInstance;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Editable profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Archetype this document was derived from (context only)
    pub archetype_id: String,

    /// Template applied on creation, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,

    sections: Arc<Vec<Arc<SectionInstance>>>,

    ids: IdGenerator,
}

impl Document {
    /// Create an empty document for an archetype (and optional template)
    pub fn new(archetype_id: impl Into<String>, template_id: Option<String>) -> Self {
        let archetype_id = archetype_id.into();
        let ids = IdGenerator::new(&archetype_id, template_id.as_deref());

        Self {
            archetype_id,
            template_id,
            sections: Arc::new(Vec::new()),
            ids,
        }
    }

    pub fn sections(&self) -> &[Arc<SectionInstance>] {
        &self.sections
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionInstance> {
        self.sections.iter().map(|section| section.as_ref())
    }

    pub fn section(&self, id: &str) -> Option<&SectionInstance> {
        self.iter().find(|section| section.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn section_ids(&self) -> Vec<&str> {
        self.iter().map(|section| section.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Id generator state (how many instance ids were handed out)
    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    /// Identity comparison: true when both values share the same section list
    pub fn is_same(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.sections, &other.sections) && self.ids == other.ids
    }

    /// First section id that occurs more than once, if any
    pub fn duplicate_section_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.iter()
            .map(|section| section.id.as_str())
            .find(|id| !seen.insert(*id))
    }

    /// Same document with the id counter moved past every section id it
    /// already contains. Needed for documents read from outside.
    pub fn with_synced_ids(&self) -> Document {
        let mut ids = self.ids.clone();
        for section in self.iter() {
            ids.observe(&section.id);
        }
        Self {
            ids,
            ..self.clone()
        }
    }

    /// Insert a section built by `build` from a freshly generated id.
    ///
    /// `position` is clamped to `[0, len]`. Returns the new document and the
    /// id that was assigned, or `None` when no ids are left.
    pub fn with_new_section<F>(&self, position: usize, build: F) -> Option<(Document, String)>
    where
        F: FnOnce(String) -> SectionInstance,
    {
        let mut ids = self.ids.clone();
        let id = ids.new_id()?;
        let section = Arc::new(build(id.clone()));

        let mut sections = self.sections.as_ref().clone();
        sections.insert(position.min(sections.len()), section);

        let next = Self {
            archetype_id: self.archetype_id.clone(),
            template_id: self.template_id.clone(),
            sections: Arc::new(sections),
            ids,
        };
        Some((next, id))
    }

    /// Replace the section at `position`; `None` if out of range
    pub fn with_section(&self, position: usize, section: SectionInstance) -> Option<Document> {
        let mut sections = self.sections.as_ref().clone();
        *sections.get_mut(position)? = Arc::new(section);
        Some(self.derive(sections))
    }

    /// Remove the section at `position`; `None` if out of range
    pub fn without_section(&self, position: usize) -> Option<Document> {
        if position >= self.sections.len() {
            return None;
        }
        let mut sections = self.sections.as_ref().clone();
        sections.remove(position);
        Some(self.derive(sections))
    }

    /// Rearrange sections; `order[i]` is the current position of the section
    /// that should end up at `i`. `None` unless `order` is a permutation of
    /// `0..len`.
    pub fn reordered(&self, order: &[usize]) -> Option<Document> {
        if order.len() != self.sections.len() {
            return None;
        }

        let mut seen = vec![false; order.len()];
        let mut sections = Vec::with_capacity(order.len());
        for &position in order {
            let taken = seen.get_mut(position)?;
            if *taken {
                return None;
            }
            *taken = true;
            sections.push(self.sections[position].clone());
        }
        Some(self.derive(sections))
    }

    fn derive(&self, sections: Vec<Arc<SectionInstance>>) -> Document {
        Self {
            archetype_id: self.archetype_id.clone(),
            template_id: self.template_id.clone(),
            sections: Arc::new(sections),
            ids: self.ids.clone(),
        }
    }
}
