use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Non-fatal finding produced while rendering
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderDiagnostic {
    /// Section skipped because its component is not in the catalog
    #[error("Section '{section_id}' references missing component '{component_id}'")]
    #[serde(rename_all = "camelCase")]
    DanglingComponentReference {
        section_id: String,
        component_id: String,
    },
}
