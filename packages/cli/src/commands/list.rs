use crate::config::Config;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use profilekit_catalog::Catalog;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    All,
    Archetypes,
    Templates,
    Components,
    Resources,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which collection to list
    #[arg(value_enum, default_value = "all")]
    pub kind: ListKind,
}

pub fn list(args: ListArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.catalog(cwd)?;

    let show = |kind: ListKind| args.kind == ListKind::All || args.kind == kind;

    if show(ListKind::Archetypes) {
        print_archetypes(&catalog);
    }
    if show(ListKind::Templates) {
        print_templates(&catalog);
    }
    if show(ListKind::Components) {
        print_components(&catalog);
    }
    if show(ListKind::Resources) {
        print_resources(&catalog);
    }

    Ok(())
}

fn heading(title: &str, count: usize) {
    println!("{} {}", title.bright_blue().bold(), format!("({})", count).dimmed());
}

fn print_archetypes(catalog: &Catalog) {
    heading("Archetypes", catalog.archetypes().len());
    for archetype in catalog.archetypes().iter() {
        println!(
            "  {} {:<20} {}",
            archetype.glyph,
            archetype.id.bright_white().bold(),
            archetype.tagline.dimmed()
        );
    }
    println!();
}

fn print_templates(catalog: &Catalog) {
    heading("Templates", catalog.templates().len());
    for template in catalog.templates().iter() {
        println!(
            "  {} {:<26} {} {}",
            template.icon,
            template.id.bright_white().bold(),
            template.name,
            format!("[{}]", template.archetypes.join(", ")).dimmed()
        );
    }
    println!();
}

fn print_components(catalog: &Catalog) {
    heading("Components", catalog.components().len());
    for component in catalog.components().iter() {
        let fields: Vec<&str> = component.fields.iter().map(|f| f.key.as_str()).collect();
        println!(
            "  {:<22} {:<10} {}",
            component.id.bright_white().bold(),
            component.category.cyan(),
            fields.join(", ").dimmed()
        );
    }
    println!();
}

fn print_resources(catalog: &Catalog) {
    heading("Resources", catalog.resources().len());
    for resource in catalog.resources().iter() {
        println!(
            "  {:<22} {}",
            resource.name.bright_white().bold(),
            resource.url.underline()
        );
    }
    println!();
}
