use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use profilekit_editor::ProfileVariables;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Archetype used by `new` when none is given
    #[arg(short, long, default_value = "builder")]
    pub archetype: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing profilekit...".bright_blue().bold());

    let config = Config {
        profile: ProfileVariables::new()
            .with("name", "Your Name")
            .with("username", "your-github-handle"),
        default_archetype: args.archetype,
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Ready!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Fill in your profile in {}", DEFAULT_CONFIG_NAME);
    println!("  2. Run: profilekit new --out profile.json");
    println!("  3. Run: profilekit render profile.json --out README.md");

    Ok(())
}
