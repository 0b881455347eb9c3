use crate::config::{parse_var, require_file, Config};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use profilekit_editor::{load_document, render as render_document};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Saved document to render
    pub file: PathBuf,

    /// Profile variable override, e.g. --var name="Ada Lovelace"
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_var)]
    pub vars: Vec<(String, String)>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let catalog = config.catalog(cwd)?;

    let file = cwd.join(&args.file);
    require_file(&file)?;
    let document = load_document(&file)?;

    let variables = config.variables(&args.vars);
    let output = render_document(&document, &catalog, &variables);

    for diagnostic in &output.diagnostics {
        eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
    }

    match &args.out {
        Some(out) => {
            let out = cwd.join(out);
            fs::write(&out, &output.text)?;
            eprintln!("{} Rendered {}", "✓".green(), out.display());
        }
        None => print!("{}", output.text),
    }

    Ok(())
}
