use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::{
    error::AppError,
    finder::{RecipeRequest, RecipeResponse},
    routes::AppState,
};

/// POST /api/recipes - Recipes for the given ingredients plus a recommendation
///
/// A body that is not a JSON recipe request fails like a search would.
pub async fn search(
    State(app): State<AppState>,
    request: Result<Json<RecipeRequest>, JsonRejection>,
) -> Result<Json<RecipeResponse>, AppError> {
    let Json(request) = request.map_err(AppError::RecipeRequest)?;
    Ok(Json(app.finder.find(request).await?))
}
