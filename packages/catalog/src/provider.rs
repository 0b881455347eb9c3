use crate::definitions::{Archetype, ComponentDefinition, Template};

/// Component catalog provider
///
/// The composition and render engines only ever resolve components through
/// this trait, so hosts can back it with something other than [`Catalog`](crate::Catalog).
pub trait ComponentLookup {
    fn component(&self, id: &str) -> Option<&ComponentDefinition>;
}

/// Archetype/template catalog provider
pub trait StarterLookup {
    fn archetype(&self, id: &str) -> Option<&Archetype>;

    fn template(&self, id: &str) -> Option<&Template>;

    /// Templates whose compatibility list contains `archetype_id`
    fn templates_compatible_with(&self, archetype_id: &str) -> Vec<&Template>;
}

impl<T: ComponentLookup + ?Sized> ComponentLookup for &T {
    fn component(&self, id: &str) -> Option<&ComponentDefinition> {
        (**self).component(id)
    }
}

impl<T: StarterLookup + ?Sized> StarterLookup for &T {
    fn archetype(&self, id: &str) -> Option<&Archetype> {
        (**self).archetype(id)
    }

    fn template(&self, id: &str) -> Option<&Template> {
        (**self).template(id)
    }

    fn templates_compatible_with(&self, archetype_id: &str) -> Vec<&Template> {
        (**self).templates_compatible_with(archetype_id)
    }
}
