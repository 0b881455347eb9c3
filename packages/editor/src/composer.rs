//! # Composition Engine
//!
//! Builds documents from catalog starting points and implements every
//! document mutation as a function `(&Document, args) -> Result<Document>`.
//!
//! ```text
//! archetype ──┐
//!             ├─ initialize ─→ Document ─→ add / remove / reorder /
//! template? ──┘                             update / replace ─→ Document'
//! ```

use crate::mutations::MutationError;
use profilekit_catalog::{ComponentLookup, SectionSeed, StarterLookup};
use profilekit_document::{Document, SectionInstance};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Create a document from an archetype, or from a template compatible with it.
///
/// A template replaces the archetype's layout entirely; the archetype id is
/// still recorded on the document. Seeds are deep-copied under fresh ids.
#[instrument(skip(catalog))]
pub fn initialize<C>(
    catalog: &C,
    archetype_id: &str,
    template_id: Option<&str>,
) -> Result<Document, MutationError>
where
    C: ComponentLookup + StarterLookup + ?Sized,
{
    let archetype = catalog
        .archetype(archetype_id)
        .ok_or_else(|| MutationError::UnknownArchetype(archetype_id.to_string()))?;

    let seeds = match template_id {
        None => &archetype.sections,
        Some(template_id) => {
            let template = catalog
                .template(template_id)
                .ok_or_else(|| MutationError::UnknownTemplate(template_id.to_string()))?;

            if !template.is_compatible_with(archetype_id) {
                return Err(MutationError::IncompatibleTemplate {
                    template_id: template_id.to_string(),
                    archetype_id: archetype_id.to_string(),
                });
            }

            &template.sections
        }
    };

    let mut doc = Document::new(archetype_id, template_id.map(str::to_string));
    for seed in seeds {
        let (next, _) = doc
            .with_new_section(doc.len(), |id| section_from_seed(catalog, id, seed))
            .ok_or(MutationError::IdsExhausted)?;
        doc = next;
    }

    info!(sections = doc.len(), "Document initialized");
    Ok(doc)
}

/// Copy a seed, dropping values for fields its component does not declare
fn section_from_seed<C>(catalog: &C, id: String, seed: &SectionSeed) -> SectionInstance
where
    C: ComponentLookup + ?Sized,
{
    let mut section = SectionInstance::from_seed(id, seed);

    if let Some(component) = catalog.component(&seed.component_id) {
        section.values.retain(|key, _| {
            let declared = component.declares(key);
            if !declared {
                warn!(
                    seed_id = %seed.id,
                    component_id = %component.id,
                    field = %key,
                    "Dropping seed value for undeclared field"
                );
            }
            declared
        });
    }

    section
}

/// Insert a new, empty section for `component_id` at `position` (clamped)
pub fn add_section<C>(
    doc: &Document,
    components: &C,
    component_id: &str,
    position: usize,
) -> Result<Document, MutationError>
where
    C: ComponentLookup + ?Sized,
{
    if components.component(component_id).is_none() {
        return Err(MutationError::UnknownComponent(component_id.to_string()));
    }

    let (next, id) = doc
        .with_new_section(position, |id| SectionInstance::new(id, component_id))
        .ok_or(MutationError::IdsExhausted)?;

    debug!(section_id = %id, component_id, "Section added");
    Ok(next)
}

/// Remove a section; the remaining sections keep their relative order
pub fn remove_section(doc: &Document, section_id: &str) -> Result<Document, MutationError> {
    let position = find_section(doc, section_id)?;

    let next = doc
        .without_section(position)
        .ok_or_else(|| MutationError::UnknownSection(section_id.to_string()))?;

    debug!(section_id, "Section removed");
    Ok(next)
}

/// Put sections in the order given by `order`, which must be a permutation
/// of the document's current instance ids
pub fn reorder_sections(doc: &Document, order: &[String]) -> Result<Document, MutationError> {
    if order.len() != doc.len() {
        return Err(MutationError::InvalidPermutation(format!(
            "expected {} section ids, got {}",
            doc.len(),
            order.len()
        )));
    }

    let current: HashMap<&str, usize> = doc
        .iter()
        .enumerate()
        .map(|(position, section)| (section.id.as_str(), position))
        .collect();

    let mut seen = vec![false; doc.len()];
    let mut positions = Vec::with_capacity(order.len());

    for id in order {
        let position = *current.get(id.as_str()).ok_or_else(|| {
            MutationError::InvalidPermutation(format!("'{}' is not a section of this document", id))
        })?;

        if seen[position] {
            return Err(MutationError::InvalidPermutation(format!(
                "'{}' appears more than once",
                id
            )));
        }
        seen[position] = true;
        positions.push(position);
    }

    doc.reordered(&positions)
        .ok_or_else(|| MutationError::InvalidPermutation("not a permutation".to_string()))
}

/// Set a field value on a section after validating key and constraint
pub fn update_field_value<C>(
    doc: &Document,
    components: &C,
    section_id: &str,
    field: &str,
    value: &str,
) -> Result<Document, MutationError>
where
    C: ComponentLookup + ?Sized,
{
    let position = find_section(doc, section_id)?;
    let section = &doc.sections()[position];

    let component = components
        .component(&section.component_id)
        .ok_or_else(|| MutationError::UnknownComponent(section.component_id.clone()))?;

    let definition = component
        .field(field)
        .ok_or_else(|| MutationError::UnknownField {
            component_id: component.id.clone(),
            field: field.to_string(),
        })?;

    definition
        .check(value)
        .map_err(|reason| MutationError::InvalidFieldValue {
            field: field.to_string(),
            reason,
        })?;

    let mut updated = section.as_ref().clone();
    updated.values.insert(field.to_string(), value.to_string());

    let next = doc
        .with_section(position, updated)
        .ok_or_else(|| MutationError::UnknownSection(section_id.to_string()))?;

    debug!(section_id, field, "Field updated");
    Ok(next)
}

/// Swap the component behind a section.
///
/// Every value whose key the new component also declares is carried over
/// as is, even if the new field's constraint would reject it. Values for
/// other keys are dropped. New fields fall back to their defaults.
pub fn replace_component<C>(
    doc: &Document,
    components: &C,
    section_id: &str,
    component_id: &str,
) -> Result<Document, MutationError>
where
    C: ComponentLookup + ?Sized,
{
    let position = find_section(doc, section_id)?;
    let section = &doc.sections()[position];

    let component = components
        .component(component_id)
        .ok_or_else(|| MutationError::UnknownComponent(component_id.to_string()))?;

    let values = section
        .values
        .iter()
        .filter(|(key, _)| component.declares(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    let replaced = SectionInstance {
        id: section.id.clone(),
        component_id: component_id.to_string(),
        values,
    };

    debug!(
        section_id,
        from = %section.component_id,
        to = component_id,
        kept = replaced.values.len(),
        "Component replaced"
    );
    doc.with_section(position, replaced)
        .ok_or_else(|| MutationError::UnknownSection(section_id.to_string()))
}

fn find_section(doc: &Document, section_id: &str) -> Result<usize, MutationError> {
    doc.position_of(section_id)
        .ok_or_else(|| MutationError::UnknownSection(section_id.to_string()))
}
