//! # Profilekit Catalog
//!
//! Static, read-only building blocks for profile documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ catalog: definitions looked up by id        │
//! │  - Components (fields + render template)    │
//! │  - Archetypes (curated starting layouts)    │
//! │  - Templates (pre-filled examples)          │
//! │  - Resources (external links)               │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: live sections referencing ids     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything else in the workspace refers to catalog entries by string id,
//! never by reference, so entries stay serializable and swappable.

mod builtin;
mod catalog;
mod definitions;
mod diagnostic;
mod error;
mod placeholder;
mod provider;
mod validate;

pub use catalog::{Catalog, CatalogData, Registry};
pub use definitions::{
    Archetype, ComponentDefinition, FieldConstraint, FieldDefinition, FieldKind, Identified,
    ResourceLink, SectionSeed, Template,
};
pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use error::CatalogError;
pub use placeholder::{is_profile_variable, segments, Segment, Segments, PROFILE_VARIABLES};
pub use provider::{ComponentLookup, StarterLookup};
pub use validate::validate_catalog;
