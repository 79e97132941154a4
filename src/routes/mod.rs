use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};
use smart_recipe_saved::{SavedRecipes, StorageBackend};
use tokio::sync::Mutex;

use crate::finder::RecipeFinder;

mod health;
mod recipes;
mod saved;

/// The process-wide saved collection. Mutations are serialized by the lock.
pub type SharedSavedRecipes = Arc<Mutex<SavedRecipes<Box<dyn StorageBackend>>>>;

#[derive(Clone)]
pub struct AppState {
    pub finder: RecipeFinder,
    pub saved: SharedSavedRecipes,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/recipes", post(recipes::search))
        .route("/api/saved", get(saved::list).delete(saved::clear))
        .route("/api/saved/toggle", post(saved::toggle))
        .route("/api/saved/check", post(saved::check))
        .route("/api/saved/export", get(saved::export))
        .route("/api/saved/import", post(saved::import))
        .route("/api/saved/{key}", delete(saved::remove))
        .with_state(app_state)
}
