use crate::config::{load_catalog, Config};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use profilekit_catalog::{validate_catalog, DiagnosticLevel};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Catalog file to check (defaults to the configured or built-in catalog)
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,
}

pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<()> {
    let catalog = match &args.catalog {
        Some(path) => load_catalog(&cwd.join(path))?,
        None => Config::load(cwd)?.catalog(cwd)?,
    };

    let diagnostics = validate_catalog(&catalog);

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics.len() - errors;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&diagnostics)?);
    } else {
        for diagnostic in &diagnostics {
            let level_str = match diagnostic.level {
                DiagnosticLevel::Error => "error".red().bold(),
                DiagnosticLevel::Warning => "warning".yellow().bold(),
            };

            println!(
                "  {} [{}] {}: {}",
                level_str,
                diagnostic.rule,
                diagnostic.subject.bright_white(),
                diagnostic.message
            );

            if let Some(suggestion) = &diagnostic.suggestion {
                println!("    {} {}", "💡".dimmed(), suggestion.dimmed());
            }
        }

        println!();
        println!(
            "   {} components, {} archetypes, {} templates, {} resources",
            catalog.components().len(),
            catalog.archetypes().len(),
            catalog.templates().len(),
            catalog.resources().len()
        );
        if errors > 0 {
            println!("   {} {}", "Errors:".red(), errors);
        }
        if warnings > 0 {
            println!("   {} {}", "Warnings:".yellow(), warnings);
        }
        if diagnostics.is_empty() {
            println!("   {} No issues found!", "✓".green());
        }
    }

    if errors > 0 {
        return Err(anyhow!("Catalog has {} error(s)", errors));
    }

    Ok(())
}
