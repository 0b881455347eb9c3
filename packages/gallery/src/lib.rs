//! # Profilekit Gallery
//!
//! Browse the catalog: keyword search plus tab and category filters over the
//! four collections (templates, archetypes, components, resources).
//!
//! The gallery only reads the catalog. It never touches documents.
//!
//! ## Example
//!
//! ```rust,ignore
//! let results = search(&catalog, &GalleryQuery::new("rust").tab(GalleryTab::Templates));
//! println!("{} templates", results.counts.templates);
//! ```

mod query;
mod search;

pub use query::{GalleryQuery, GalleryTab, UnknownTab};
pub use search::{categories, search, GalleryCounts, GalleryResults, Searchable};
