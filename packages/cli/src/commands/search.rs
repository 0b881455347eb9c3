use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use profilekit_gallery::{categories, search as run_search, GalleryQuery, GalleryResults, GalleryTab};
use std::path::Path;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword (omit to browse everything)
    #[arg(default_value = "")]
    pub text: String,

    /// Tab to show (all, templates, archetypes, components, resources)
    #[arg(short, long, default_value = "all")]
    pub tab: GalleryTab,

    /// Only entries in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn search(args: SearchArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.catalog(cwd)?;

    if let Some(category) = &args.category {
        let known = categories(&catalog);
        if !known.iter().any(|c| c.eq_ignore_ascii_case(category)) {
            return Err(anyhow!(
                "Unknown category '{}' (known: {})",
                category,
                known.join(", ")
            ));
        }
    }

    let query = GalleryQuery {
        text: args.text,
        tab: args.tab,
        category: args.category,
    };
    let results = run_search(&catalog, &query);

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        "text" => print_results(&query, &results),
        other => return Err(anyhow!("Unknown format: {}. Use: text or json", other)),
    }

    Ok(())
}

fn print_results(query: &GalleryQuery, results: &GalleryResults<'_>) {
    let counts = &results.counts;
    let tabs = [
        (GalleryTab::All, counts.total()),
        (GalleryTab::Templates, counts.templates),
        (GalleryTab::Archetypes, counts.archetypes),
        (GalleryTab::Components, counts.components),
        (GalleryTab::Resources, counts.resources),
    ];

    let line: Vec<String> = tabs
        .iter()
        .map(|(tab, count)| {
            let label = format!("{} ({})", tab, count);
            if *tab == query.tab {
                label.bright_white().bold().underline().to_string()
            } else {
                label.dimmed().to_string()
            }
        })
        .collect();
    println!("{}", line.join("  "));
    println!();

    if results.is_empty() {
        println!("{}", "No matches".yellow());
        return;
    }

    for template in &results.templates {
        println!(
            "  {} {} {}",
            "template ".cyan(),
            template.id.bright_white().bold(),
            template.description.dimmed()
        );
    }
    for archetype in &results.archetypes {
        println!(
            "  {} {} {}",
            "archetype".magenta(),
            archetype.id.bright_white().bold(),
            archetype.tagline.dimmed()
        );
    }
    for component in &results.components {
        println!(
            "  {} {} {}",
            "component".green(),
            component.id.bright_white().bold(),
            component.description.dimmed()
        );
    }
    for resource in &results.resources {
        println!(
            "  {} {} {}",
            "resource ".blue(),
            resource.name.bright_white().bold(),
            resource.url.underline()
        );
    }
}
