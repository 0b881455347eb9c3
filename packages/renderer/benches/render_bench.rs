use criterion::{black_box, criterion_group, criterion_main, Criterion};
use profilekit_catalog::{Catalog, StarterLookup};
use profilekit_document::{Document, SectionInstance};
use profilekit_renderer::{render, ProfileVariables};

fn build_document(catalog: &Catalog, archetype_id: &str, copies: usize) -> Document {
    let archetype = catalog.archetype(archetype_id).unwrap();
    let mut doc = Document::new(archetype_id, None);
    for _ in 0..copies {
        for seed in &archetype.sections {
            let (next, _) = doc
                .with_new_section(doc.len(), |id| SectionInstance::from_seed(id, seed))
                .unwrap();
            doc = next;
        }
    }
    doc
}

fn render_archetype(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let doc = build_document(&catalog, "builder", 1);
    let vars = ProfileVariables::new().with("name", "Ada").with("username", "ada");

    c.bench_function("render_builder_archetype", |b| {
        b.iter(|| render(black_box(&doc), &catalog, &vars))
    });
}

fn render_large_document(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let doc = build_document(&catalog, "creator", 50);
    let vars = ProfileVariables::new().with("name", "Ada").with("username", "ada");

    c.bench_function("render_250_sections", |b| {
        b.iter(|| render(black_box(&doc), &catalog, &vars))
    });
}

criterion_group!(benches, render_archetype, render_large_document);
criterion_main!(benches);
