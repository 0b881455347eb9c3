//! # Catalog Validation
//!
//! Load-time referential checks over a whole catalog. Shipped data must
//! produce no errors: every id a seed or template points at resolves, and
//! every seeded value is accepted by its field.

use crate::catalog::Catalog;
use crate::definitions::{ComponentDefinition, SectionSeed};
use crate::diagnostic::Diagnostic;
use crate::placeholder::{is_profile_variable, segments, Segment};
use std::collections::HashSet;

/// Validate a catalog and return all diagnostics
pub fn validate_catalog(catalog: &Catalog) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for component in catalog.components().iter() {
        diagnostics.extend(check_component(component));
    }

    for archetype in catalog.archetypes().iter() {
        let subject = format!("archetype:{}", archetype.id);
        diagnostics.extend(check_seeds(catalog, &subject, &archetype.sections));
    }

    for template in catalog.templates().iter() {
        let subject = format!("template:{}", template.id);

        if template.archetypes.is_empty() {
            diagnostics.push(Diagnostic::error(
                "template-compatibility",
                &subject,
                "template is not compatible with any archetype",
            ));
        }

        for archetype_id in &template.archetypes {
            if !catalog.archetypes().contains(archetype_id) {
                diagnostics.push(Diagnostic::error(
                    "unknown-archetype",
                    &subject,
                    format!("compatible archetype '{}' does not exist", archetype_id),
                ));
            }
        }

        diagnostics.extend(check_seeds(catalog, &subject, &template.sections));
    }

    tracing::debug!(findings = diagnostics.len(), "Catalog validation complete");
    diagnostics
}

fn check_component(component: &ComponentDefinition) -> Vec<Diagnostic> {
    let subject = format!("component:{}", component.id);
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();

    for field in &component.fields {
        if !seen.insert(field.key.as_str()) {
            diagnostics.push(Diagnostic::error(
                "duplicate-field",
                &subject,
                format!("field '{}' is declared more than once", field.key),
            ));
        }

        if is_profile_variable(&field.key) {
            diagnostics.push(
                Diagnostic::warning(
                    "shadowed-profile-variable",
                    &subject,
                    format!("field '{}' shadows the profile variable of the same name", field.key),
                )
                .with_suggestion("rename the field"),
            );
        }

        if let Some(default) = &field.default {
            if let Err(reason) = field.check(default) {
                diagnostics.push(Diagnostic::error(
                    "invalid-default",
                    &subject,
                    format!("default for '{}' is rejected: {}", field.key, reason),
                ));
            }
        }
    }

    for segment in segments(&component.template) {
        if let Segment::Placeholder { key, raw } = segment {
            if !component.declares(key) && !is_profile_variable(key) {
                diagnostics.push(
                    Diagnostic::warning(
                        "unresolved-placeholder",
                        &subject,
                        format!("{} is neither a field nor a profile variable and renders empty", raw),
                    )
                    .with_suggestion(format!("declare a field named '{}'", key)),
                );
            }
        }
    }

    diagnostics
}

fn check_seeds(catalog: &Catalog, subject: &str, seeds: &[SectionSeed]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut seen = HashSet::new();

    for seed in seeds {
        if !seen.insert(seed.id.as_str()) {
            diagnostics.push(Diagnostic::error(
                "duplicate-section",
                subject,
                format!("section id '{}' is used more than once", seed.id),
            ));
        }

        let component = match catalog.components().get(&seed.component_id) {
            Some(component) => component,
            None => {
                diagnostics.push(Diagnostic::error(
                    "unknown-component",
                    subject,
                    format!(
                        "section '{}' references missing component '{}'",
                        seed.id, seed.component_id
                    ),
                ));
                continue;
            }
        };

        for (key, value) in &seed.values {
            match component.field(key) {
                None => diagnostics.push(Diagnostic::error(
                    "unknown-field",
                    subject,
                    format!(
                        "section '{}' sets '{}' which component '{}' does not declare",
                        seed.id, key, component.id
                    ),
                )),
                Some(field) => {
                    if let Err(reason) = field.check(value) {
                        diagnostics.push(Diagnostic::error(
                            "invalid-value",
                            subject,
                            format!("section '{}' field '{}': {}", seed.id, key, reason),
                        ));
                    }
                }
            }
        }
    }

    diagnostics
}
