use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use smart_recipe_saved::ImportError;
use thiserror::Error;
use tokio::task::JoinError;

use crate::{finder::FindError, spoonacular::SearchError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ingredients are required")]
    MissingIngredients,

    #[error("Unreadable recipe request: {0}")]
    RecipeRequest(JsonRejection),

    #[error("Recipe search error: {0}")]
    SearchError(#[from] SearchError),

    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Saved recipes task failed: {0}")]
    SavedTask(#[from] JoinError),
}

impl From<FindError> for AppError {
    fn from(err: FindError) -> Self {
        match err {
            FindError::MissingIngredients => AppError::MissingIngredients,
            FindError::Search(e) => AppError::SearchError(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AppError::MissingIngredients => {
                (StatusCode::BAD_REQUEST, "Ingredients are required".to_string())
            }
            AppError::SearchError(SearchError::Unauthorized) => {
                tracing::error!("Recipe search rejected the API key");
                (
                    StatusCode::UNAUTHORIZED,
                    "API authentication failed. Please check the configuration.".to_string(),
                )
            }
            AppError::SearchError(SearchError::QuotaExceeded) => {
                tracing::error!("Recipe search quota exceeded");
                (
                    StatusCode::PAYMENT_REQUIRED,
                    "API quota exceeded. Please try again later.".to_string(),
                )
            }
            AppError::RecipeRequest(rejection) => {
                tracing::warn!("Unreadable recipe request: {}", rejection.body_text());
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch recipes. Please try again.".to_string(),
                )
            }
            AppError::SearchError(e) => {
                tracing::error!("Recipe search error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch recipes. Please try again.".to_string(),
                )
            }
            AppError::ImportError(e) => {
                tracing::warn!("Rejected saved recipes import: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    "Error importing recipes. Please check the file format.".to_string(),
                )
            }
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::SavedTask(e) => {
                tracing::error!("Saved recipes task failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to update saved recipes.".to_string(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
