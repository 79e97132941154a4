pub mod cli;
pub mod config;
pub mod error;
pub mod finder;
pub mod llm;
pub mod observability;
pub mod routes;
pub mod spoonacular;

use std::sync::Arc;

use smart_recipe_saved::{FileStorage, SavedRecipes, StorageBackend};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use routes::AppState;

/// Wire the production collaborators described by the configuration.
pub fn app_state(config: &Config) -> anyhow::Result<AppState> {
    let search = Arc::new(spoonacular::SpoonacularClient::new(&config.spoonacular));
    let llm = llm::create_provider(&config.llm)?;
    let finder = finder::RecipeFinder::new(search, llm, config.fallback.seed);

    let storage: Box<dyn StorageBackend> = Box::new(FileStorage::new(&config.storage.dir));
    let saved = Arc::new(Mutex::new(SavedRecipes::load(storage)));

    Ok(AppState { finder, saved })
}

/// Create app router
///
/// Used by the server and by integration tests without binding a socket.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state).layer(TraceLayer::new_for_http())
}
