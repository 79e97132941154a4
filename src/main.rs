use anyhow::Result;
use clap::{Parser, Subcommand};
use smart_recipe::cli::saved::SavedCommand;

/// smart-recipe - Recipes from the ingredients you have
#[derive(Parser)]
#[command(name = "smart-recipe")]
#[command(about = "Recipe recommendations from your ingredients", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Manage saved recipes
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = smart_recipe::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    smart_recipe::observability::init_observability(
        "smart-recipe",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Saved { command } => smart_recipe::cli::saved::run(config, command),
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: smart_recipe::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    smart_recipe::cli::server::serve(config, host_override, port_override).await
}
