//! # Profilekit Renderer
//!
//! Turns a [`Document`](profilekit_document::Document) plus a set of profile
//! variables into the final text.
//!
//! Rendering is total: a section whose component is missing from the
//! catalog is skipped and reported as a diagnostic, every other problem
//! (unknown placeholders, unsupplied variables) has a defined textual
//! result. Output depends only on the inputs, so repeated renders are
//! byte-identical.

mod diagnostic;
mod profile;
mod render;

pub use diagnostic::RenderDiagnostic;
pub use profile::ProfileVariables;
pub use render::{effective_values, render, render_section, RenderOutput, SECTION_SEPARATOR};
