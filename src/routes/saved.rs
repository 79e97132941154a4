use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection, StringRejection},
    },
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::{Value, json};
use smart_recipe_saved::{SavedRecipes, StorageBackend};
use smart_recipe_shared::{Recipe, RecipeKey};

use crate::{error::AppError, routes::AppState};

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoveBy {
    #[default]
    Id,
    Title,
}

#[derive(Debug, Default, Deserialize)]
pub struct RemoveQuery {
    #[serde(default)]
    pub by: RemoveBy,
}

/// Run `op` against the locked collection on the blocking pool, since
/// mutations write through to storage.
async fn with_saved<T, F>(app: &AppState, op: F) -> Result<T, AppError>
where
    F: FnOnce(&mut SavedRecipes<Box<dyn StorageBackend>>) -> T + Send + 'static,
    T: Send + 'static,
{
    let mut saved = app.saved.clone().lock_owned().await;
    Ok(tokio::task::spawn_blocking(move || op(&mut saved)).await?)
}

fn recipe_body(body: Result<Json<Recipe>, JsonRejection>) -> Result<Recipe, AppError> {
    body.map(|Json(recipe)| recipe)
        .map_err(|rejection| AppError::ValidationError(rejection.body_text()))
}

/// GET /api/saved
pub async fn list(State(app): State<AppState>) -> Json<Value> {
    let saved = app.saved.lock().await;
    Json(json!({ "recipes": saved.recipes(), "count": saved.count() }))
}

/// POST /api/saved/toggle - Save the recipe, or unsave it when already saved
pub async fn toggle(
    State(app): State<AppState>,
    body: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let recipe = recipe_body(body)?;
    let title = recipe.title.clone();

    let (is_saved, count) = with_saved(&app, move |saved| {
        let is_saved = saved.save_recipe(recipe);
        (is_saved, saved.count())
    })
    .await?;

    tracing::info!(recipe = %title, saved = is_saved, "Toggled saved recipe");

    Ok(Json(json!({ "saved": is_saved, "count": count })))
}

/// POST /api/saved/check
pub async fn check(
    State(app): State<AppState>,
    body: Result<Json<Recipe>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let recipe = recipe_body(body)?;
    let saved = app.saved.lock().await;
    Ok(Json(json!({ "saved": saved.is_recipe_saved(&recipe) })))
}

/// DELETE /api/saved/{key}?by=id|title
pub async fn remove(
    State(app): State<AppState>,
    Path(key): Path<String>,
    query: Result<Query<RemoveQuery>, QueryRejection>,
) -> Result<Json<Value>, AppError> {
    let Query(query) =
        query.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;

    let key = match query.by {
        RemoveBy::Id => RecipeKey::Id(
            key.parse()
                .map_err(|_| AppError::ValidationError(format!("Invalid recipe id: {key}")))?,
        ),
        RemoveBy::Title => RecipeKey::Title(key),
    };

    let log_key = key.to_string();
    let (removed, count) = with_saved(&app, move |saved| {
        let removed = saved.remove_recipe(&key);
        (removed, saved.count())
    })
    .await?;

    tracing::info!(key = %log_key, removed, "Removed saved recipe");

    Ok(Json(json!({ "count": count })))
}

/// DELETE /api/saved
pub async fn clear(State(app): State<AppState>) -> Result<Json<Value>, AppError> {
    with_saved(&app, |saved| saved.clear_all()).await?;
    tracing::info!("Cleared saved recipes");

    Ok(Json(json!({ "count": 0 })))
}

/// GET /api/saved/export - Pretty JSON download
pub async fn export(State(app): State<AppState>) -> impl IntoResponse {
    let body = app.saved.lock().await.export();

    (
        [
            (header::CONTENT_TYPE, "application/json"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"saved-recipes.json\"",
            ),
        ],
        body,
    )
}

/// POST /api/saved/import - Replace the collection with the posted JSON text
pub async fn import(
    State(app): State<AppState>,
    body: Result<String, StringRejection>,
) -> Result<Json<Value>, AppError> {
    let body = body.map_err(|rejection| AppError::ValidationError(rejection.body_text()))?;
    let imported = with_saved(&app, move |saved| saved.import(&body)).await??;
    tracing::info!(imported, "Imported saved recipes");

    Ok(Json(json!({ "imported": imported })))
}
