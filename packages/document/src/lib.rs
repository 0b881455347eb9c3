//! # Profilekit Document
//!
//! The live, editable state of one editor session: an ordered list of
//! section instances plus the archetype it was derived from.
//!
//! Documents are values. Every edit produces a new `Document` that shares
//! untouched sections with its predecessor (copy-on-write through `Arc`),
//! so older versions kept in history are never altered.

mod document;
mod id_generator;
mod section;

pub use document::Document;
pub use id_generator::{get_origin_id, IdGenerator};
pub use section::SectionInstance;
