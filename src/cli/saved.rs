use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use smart_recipe_saved::{FileStorage, SavedRecipes};
use smart_recipe_shared::RecipeKey;

#[derive(Subcommand)]
pub enum SavedCommand {
    /// List saved recipes
    List,
    /// Write saved recipes as pretty JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace saved recipes with the contents of a JSON file
    Import { file: PathBuf },
    /// Remove a saved recipe by id or title
    Remove {
        #[arg(long, conflicts_with = "title", required_unless_present = "title")]
        id: Option<u64>,
        #[arg(long)]
        title: Option<String>,
    },
    /// Remove every saved recipe
    Clear,
}

fn open(config: &crate::config::Config) -> SavedRecipes<FileStorage> {
    let storage = FileStorage::new(&config.storage.dir);
    tracing::debug!("Using saved recipes in {}", storage.dir().display());
    SavedRecipes::load(storage)
}

#[tracing::instrument(skip(config, command))]
pub fn run(config: crate::config::Config, command: SavedCommand) -> Result<()> {
    let mut saved = open(&config);

    match command {
        SavedCommand::List => {
            for recipe in saved.recipes() {
                let badges: Vec<String> = recipe
                    .dietary_badges()
                    .into_iter()
                    .map(|badge| badge.to_string())
                    .collect();
                let health = recipe
                    .health_band()
                    .map(|band| format!(" [health: {band}]"))
                    .unwrap_or_default();
                println!("{}\t{}\t{}{}", recipe.key(), recipe.title, badges.join(", "), health);
            }
            println!("{} saved recipe(s)", saved.count());
        }
        SavedCommand::Export { output } => {
            let text = saved.export();
            match output {
                Some(path) => {
                    std::fs::write(&path, text)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!("Exported {} recipes to {}", saved.count(), path.display());
                }
                None => println!("{text}"),
            }
        }
        SavedCommand::Import { file } => {
            let text = std::fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let imported = saved
                .import(&text)
                .context("Error importing recipes. Please check the file format.")?;
            tracing::info!("Imported {imported} recipes from {}", file.display());
        }
        SavedCommand::Remove { id, title } => {
            let key = match (id, title) {
                (Some(id), _) => RecipeKey::Id(id),
                (None, Some(title)) => RecipeKey::Title(title),
                (None, None) => anyhow::bail!("either --id or --title is required"),
            };
            let removed = saved.remove_recipe(&key);
            tracing::info!("Removed {removed} recipe(s) matching {key}");
        }
        SavedCommand::Clear => {
            saved.clear_all();
            tracing::info!("Cleared saved recipes");
        }
    }

    Ok(())
}
