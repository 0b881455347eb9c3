use crate::config::{require_file, Config};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use profilekit_editor::{EditSession, Mutation};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Saved document to edit
    pub file: PathBuf,

    /// JSON array of mutations, "undo" and "redo"
    #[arg(short, long)]
    pub script: PathBuf,

    /// Save the result here instead of overwriting the input
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Don't print a preview
    #[arg(short, long)]
    pub quiet: bool,
}

/// One entry of an edit script
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Mutation(Mutation),
    History(HistoryStep),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStep {
    Undo,
    Redo,
}

pub fn parse_script(source: &str) -> Result<Vec<Step>> {
    Ok(serde_json::from_str(source)?)
}

pub fn edit(args: EditArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = Arc::new(config.catalog(cwd)?);

    let file = cwd.join(&args.file);
    let script_path = cwd.join(&args.script);
    require_file(&file)?;
    require_file(&script_path)?;

    let steps = parse_script(&fs::read_to_string(&script_path)?)
        .with_context(|| format!("Invalid edit script {}", args.script.display()))?;

    let mut session = EditSession::open("cli", catalog, &file)?
        .with_history_limit(config.history_limit)
        .with_variables(config.profile.clone());

    // Any failing step aborts the whole script; nothing is saved
    for (index, step) in steps.iter().enumerate() {
        let label = match step {
            Step::Mutation(mutation) => {
                session.apply(mutation).map_err(|e| anyhow!("Step {}: {}", index + 1, e))?;
                mutation.describe()
            }
            Step::History(HistoryStep::Undo) => {
                let label = session.history().undo_description().unwrap_or("edit").to_string();
                session.undo().map_err(|e| anyhow!("Step {}: {}", index + 1, e))?;
                format!("Undo {}", label)
            }
            Step::History(HistoryStep::Redo) => {
                let label = session.history().redo_description().unwrap_or("edit").to_string();
                session.redo().map_err(|e| anyhow!("Step {}: {}", index + 1, e))?;
                format!("Redo {}", label)
            }
        };
        println!("  {} {}", "✓".green(), label);
    }

    let out = args.out.as_ref().map(|p| cwd.join(p)).unwrap_or(file);
    session.save(&out)?;

    println!();
    println!(
        "{} Applied {} steps, saved {}",
        "✅".green(),
        steps.len(),
        out.display()
    );

    let output = session.preview();
    for diagnostic in &output.diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }
    if !args.quiet {
        println!();
        print!("{}", output.text);
    }

    Ok(())
}
