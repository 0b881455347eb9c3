//! Case-insensitive substring search across catalog collections.

use crate::query::{GalleryQuery, GalleryTab};
use profilekit_catalog::{Archetype, Catalog, ComponentDefinition, ResourceLink, Template};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// An entry the gallery can match against a keyword
pub trait Searchable {
    /// Text fields the keyword is matched against
    fn haystacks(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str> {
        None
    }
}

impl Searchable for Template {
    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str(), self.category.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Searchable for Archetype {
    fn haystacks(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.tagline.as_str()]
    }
}

impl Searchable for ComponentDefinition {
    fn haystacks(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.category.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Searchable for ResourceLink {
    fn haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }
}

/// Matches per collection, before the tab is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GalleryCounts {
    pub templates: usize,
    pub archetypes: usize,
    pub components: usize,
    pub resources: usize,
}

impl GalleryCounts {
    pub fn total(&self) -> usize {
        self.templates + self.archetypes + self.components + self.resources
    }

    pub fn for_tab(&self, tab: GalleryTab) -> usize {
        match tab {
            GalleryTab::All => self.total(),
            GalleryTab::Templates => self.templates,
            GalleryTab::Archetypes => self.archetypes,
            GalleryTab::Components => self.components,
            GalleryTab::Resources => self.resources,
        }
    }
}

/// Search results; collections hidden by the tab are empty
#[derive(Debug, Clone, Default, Serialize)]
pub struct GalleryResults<'a> {
    pub templates: Vec<&'a Template>,
    pub archetypes: Vec<&'a Archetype>,
    pub components: Vec<&'a ComponentDefinition>,
    pub resources: Vec<&'a ResourceLink>,
    pub counts: GalleryCounts,
}

impl GalleryResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
            && self.archetypes.is_empty()
            && self.components.is_empty()
            && self.resources.is_empty()
    }
}

struct Matcher {
    needle: String,
    category: Option<String>,
}

impl Matcher {
    fn new(query: &GalleryQuery) -> Self {
        Self {
            needle: query.text.trim().to_lowercase(),
            category: query.category.as_ref().map(|c| c.trim().to_lowercase()),
        }
    }

    fn matches<T: Searchable>(&self, entry: &T) -> bool {
        let category_match = match &self.category {
            Some(wanted) => entry
                .category()
                .map(|c| c.to_lowercase() == *wanted)
                .unwrap_or(false),
            None => true,
        };

        let text_match = self.needle.is_empty()
            || entry
                .haystacks()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.needle));

        category_match && text_match
    }

    fn filter<'a, T, I>(&self, entries: I) -> Vec<&'a T>
    where
        T: Searchable + 'a,
        I: Iterator<Item = &'a T>,
    {
        entries.filter(|entry| self.matches(*entry)).collect()
    }
}

/// Run a gallery query against the catalog
#[instrument(skip(catalog))]
pub fn search<'a>(catalog: &'a Catalog, query: &GalleryQuery) -> GalleryResults<'a> {
    let matcher = Matcher::new(query);

    let templates = matcher.filter(catalog.templates().iter());
    let archetypes = matcher.filter(catalog.archetypes().iter());
    let components = matcher.filter(catalog.components().iter());
    let resources = matcher.filter(catalog.resources().iter());

    let counts = GalleryCounts {
        templates: templates.len(),
        archetypes: archetypes.len(),
        components: components.len(),
        resources: resources.len(),
    };
    debug!(total = counts.total(), "Gallery search complete");

    let tab = query.tab;
    GalleryResults {
        templates: if tab.shows(GalleryTab::Templates) { templates } else { Vec::new() },
        archetypes: if tab.shows(GalleryTab::Archetypes) { archetypes } else { Vec::new() },
        components: if tab.shows(GalleryTab::Components) { components } else { Vec::new() },
        resources: if tab.shows(GalleryTab::Resources) { resources } else { Vec::new() },
        counts,
    }
}

/// Distinct categories used by templates and components, sorted
pub fn categories(catalog: &Catalog) -> Vec<&str> {
    let set: BTreeSet<&str> = catalog
        .templates()
        .iter()
        .map(|t| t.category.as_str())
        .chain(catalog.components().iter().map(|c| c.category.as_str()))
        .collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_empty_text_matches_everything() {
        let catalog = catalog();
        let results = search(&catalog, &GalleryQuery::default());

        assert_eq!(results.counts.templates, catalog.templates().len());
        assert_eq!(results.counts.archetypes, catalog.archetypes().len());
        assert_eq!(results.counts.components, catalog.components().len());
        assert_eq!(results.counts.resources, catalog.resources().len());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let lower = search(&catalog, &GalleryQuery::new("rust"));
        let upper = search(&catalog, &GalleryQuery::new("RUST"));

        assert_eq!(lower.counts, upper.counts);
        assert!(lower.templates.iter().any(|t| t.id == "rust-systems-engineer"));
    }

    #[test]
    fn test_matches_tags_and_tagline() {
        let catalog = catalog();

        let by_tag = search(&catalog, &GalleryQuery::new("founder"));
        assert!(by_tag.templates.iter().any(|t| t.id == "indie-hacker"));

        let by_tagline = search(&catalog, &GalleryQuery::new("less, but"));
        assert_eq!(by_tagline.archetypes.len(), 1);
        assert_eq!(by_tagline.archetypes[0].id, "minimalist");
    }

    #[test]
    fn test_no_matches() {
        let catalog = catalog();
        let results = search(&catalog, &GalleryQuery::new("zzz-nothing"));
        assert!(results.is_empty());
        assert_eq!(results.counts.total(), 0);
    }

    #[test]
    fn test_category_filter() {
        let catalog = catalog();
        let results = search(&catalog, &GalleryQuery::default().category("Agent"));

        assert!(!results.components.is_empty());
        assert!(results.components.iter().all(|c| c.category == "agent"));
        assert!(results.archetypes.is_empty());
        assert!(results.resources.is_empty());
    }

    #[test]
    fn test_categories_are_sorted_and_distinct() {
        let catalog = catalog();
        let all = categories(&catalog);

        let mut sorted = all.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(all, sorted);
        assert!(all.contains(&"engineering"));
        assert!(all.contains(&"header"));
    }
}
