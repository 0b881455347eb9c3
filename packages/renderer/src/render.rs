//! # Render Engine
//!
//! ## Placeholder resolution
//!
//! Each `{{key}}` in a component template resolves in one pass:
//!
//! 1. `key` is a field of the component → the effective value (default
//!    overlaid by the section's own value). Profile-variable tokens inside
//!    that value are substituted once; nothing is expanded recursively.
//! 2. `key` is a profile variable → the supplied value, or the literal
//!    `{{key}}` when it was not supplied.
//! 3. Anything else → empty text.
//!
//! Each section is trimmed at the end and joined to the next with a blank
//! line. A section that renders to nothing still takes its slot.

use crate::diagnostic::RenderDiagnostic;
use crate::profile::ProfileVariables;
use profilekit_catalog::{is_profile_variable, segments, ComponentDefinition, ComponentLookup, Segment};
use profilekit_document::{Document, SectionInstance};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

/// Separator placed between rendered sections
pub const SECTION_SEPARATOR: &str = "\n\n";

/// Result of rendering a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub text: String,
    pub diagnostics: Vec<RenderDiagnostic>,
}

impl RenderOutput {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Render a document to text.
///
/// Never fails: sections whose component cannot be resolved are omitted and
/// reported in [`RenderOutput::diagnostics`].
#[instrument(skip_all, fields(sections = document.len(), archetype = %document.archetype_id))]
pub fn render<C>(document: &Document, components: &C, variables: &ProfileVariables) -> RenderOutput
where
    C: ComponentLookup + ?Sized,
{
    let mut rendered = Vec::with_capacity(document.len());
    let mut diagnostics = Vec::new();

    for section in document.iter() {
        let component = match components.component(&section.component_id) {
            Some(component) => component,
            None => {
                warn!(
                    section_id = %section.id,
                    component_id = %section.component_id,
                    "Skipping section with dangling component reference"
                );
                diagnostics.push(RenderDiagnostic::DanglingComponentReference {
                    section_id: section.id.clone(),
                    component_id: section.component_id.clone(),
                });
                continue;
            }
        };

        debug!(section_id = %section.id, component_id = %component.id, "Rendering section");
        rendered.push(render_section(section, component, variables));
    }

    let mut text = rendered.join(SECTION_SEPARATOR);
    if !text.is_empty() {
        text.push('\n');
    }

    RenderOutput { text, diagnostics }
}

/// Render one section against its (already resolved) component
pub fn render_section(
    section: &SectionInstance,
    component: &ComponentDefinition,
    variables: &ProfileVariables,
) -> String {
    let values = effective_values(section, component);
    let mut out = String::with_capacity(component.template.len());

    for segment in segments(&component.template) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder { key, raw } => {
                if let Some(value) = values.get(key) {
                    substitute_profile_variables(value, variables, &mut out);
                } else if is_profile_variable(key) {
                    out.push_str(variables.get(key).unwrap_or(raw));
                }
            }
        }
    }

    out.trim_end().to_string()
}

/// Field defaults overlaid with the section's own values.
///
/// Keys the component does not declare are ignored.
pub fn effective_values(
    section: &SectionInstance,
    component: &ComponentDefinition,
) -> BTreeMap<String, String> {
    let mut values = component.defaults();
    for (key, value) in &section.values {
        if let Some(slot) = values.get_mut(key) {
            slot.clone_from(value);
        }
    }
    values
}

fn substitute_profile_variables(value: &str, variables: &ProfileVariables, out: &mut String) {
    for segment in segments(value) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Placeholder { key, raw } => {
                let resolved = if is_profile_variable(key) {
                    variables.get(key)
                } else {
                    None
                };
                out.push_str(resolved.unwrap_or(raw));
            }
        }
    }
}
