use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use profilekit_catalog::StarterLookup;
use profilekit_editor::EditSession;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Archetype to start from (defaults to the configured one)
    pub archetype: Option<String>,

    /// Pre-filled template compatible with the archetype
    #[arg(short, long)]
    pub template: Option<String>,

    /// Where to save the document
    #[arg(short, long, default_value = "profile.json")]
    pub out: PathBuf,

    /// Overwrite an existing document
    #[arg(short, long)]
    pub force: bool,

    /// Don't print a preview
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn new(args: NewArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = Arc::new(config.catalog(cwd)?);

    let out = cwd.join(&args.out);
    if out.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            args.out.display()
        ));
    }

    // A template alone is enough: start from its first compatible archetype
    let archetype = match (&args.archetype, &args.template) {
        (Some(archetype), _) => archetype.clone(),
        (None, Some(template_id)) => catalog
            .template(template_id)
            .and_then(|t| t.archetypes.first().cloned())
            .unwrap_or_else(|| config.default_archetype.clone()),
        (None, None) => config.default_archetype.clone(),
    };

    let mut session = EditSession::start("cli", catalog, &archetype, args.template.as_deref())?
        .with_variables(config.profile.clone());
    session.save(&out)?;

    println!(
        "{} Created {} from {}{}",
        "✓".green(),
        args.out.display().to_string().bright_white(),
        archetype.bold(),
        args.template
            .as_ref()
            .map(|t| format!(" / {}", t))
            .unwrap_or_default()
    );

    if !args.quiet {
        println!();
        print!("{}", session.preview().text);
    }

    Ok(())
}
