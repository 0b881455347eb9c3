//! Properties of the shipped catalog

use profilekit_catalog::{
    segments, validate_catalog, Catalog, ComponentLookup, Segment, StarterLookup,
};

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog should load")
}

#[test]
fn test_builtin_has_no_errors() {
    let errors: Vec<_> = validate_catalog(&catalog())
        .into_iter()
        .filter(|d| d.is_error())
        .collect();
    assert!(errors.is_empty(), "{:#?}", errors);
}

#[test]
fn test_every_seed_value_is_accepted() {
    let catalog = catalog();
    let seeds = catalog
        .archetypes()
        .iter()
        .flat_map(|a| a.sections.iter())
        .chain(catalog.templates().iter().flat_map(|t| t.sections.iter()));

    for seed in seeds {
        let component = catalog.component(&seed.component_id).unwrap();
        for (key, value) in &seed.values {
            let field = component
                .field(key)
                .unwrap_or_else(|| panic!("{} has no field {}", component.id, key));
            assert!(field.check(value).is_ok(), "{}.{} = {:?}", component.id, key, value);
        }
    }
}

#[test]
fn test_every_template_has_a_compatible_archetype() {
    let catalog = catalog();
    for template in catalog.templates().iter() {
        assert!(!template.archetypes.is_empty(), "{}", template.id);
        for archetype in &template.archetypes {
            assert!(catalog.archetype(archetype).is_some(), "{} -> {}", template.id, archetype);
        }
    }

    let for_builder: Vec<_> = catalog
        .templates_compatible_with("builder")
        .into_iter()
        .map(|t| t.id.as_str())
        .collect();
    assert!(for_builder.contains(&"rust-systems-engineer"));
    assert!(!for_builder.contains(&"ml-researcher"));
}

#[test]
fn test_every_archetype_starts_with_a_header() {
    let catalog = catalog();
    for archetype in catalog.archetypes().iter() {
        let first = &archetype.sections[0];
        let component = catalog.component(&first.component_id).unwrap();
        assert_eq!(component.category, "header", "{}", archetype.id);
    }
}

#[test]
fn test_component_placeholders_are_terminated() {
    for component in catalog().components().iter() {
        for segment in segments(&component.template) {
            if let Segment::Literal(text) = segment {
                assert!(!text.contains("{{"), "{} has an unterminated placeholder", component.id);
            }
        }
    }
}
