//! Recipe search against the Spoonacular API.

use std::{fmt, sync::LazyLock};

use async_trait::async_trait;
use regex::Regex;
use reqwest::StatusCode;
use serde::Deserialize;
use smart_recipe_shared::Recipe;
use thiserror::Error;

use crate::config::SpoonacularConfig;

static RE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Spoonacular API key is not configured")]
    NotConfigured,

    #[error("Recipe search rejected the API key")]
    Unauthorized,

    #[error("Recipe search quota exceeded")]
    QuotaExceeded,

    #[error("Recipe search returned status {0}")]
    Status(u16),

    #[error("Recipe search request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// One search: normalized ingredients and an optional, already trimmed cuisine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub ingredients: Vec<String>,
    pub cuisine: Option<String>,
}

#[async_trait]
pub trait RecipeSearch: Send + Sync + fmt::Debug {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, SearchError>;
}

#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    api_key: String,
    base_url: String,
    results: u32,
    client: reqwest::Client,
}

impl SpoonacularClient {
    pub fn new(config: &SpoonacularConfig) -> Self {
        Self {
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            results: config.results,
            client: reqwest::Client::new(),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, SearchError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("x-api-key", &self.api_key)
            .query(params)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(SearchError::Unauthorized),
            StatusCode::PAYMENT_REQUIRED => Err(SearchError::QuotaExceeded),
            status if !status.is_success() => Err(SearchError::Status(status.as_u16())),
            _ => Ok(response.json().await?),
        }
    }
}

#[async_trait]
impl RecipeSearch for SpoonacularClient {
    #[tracing::instrument(skip(self), fields(results = self.results))]
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, SearchError> {
        if self.api_key.is_empty() {
            return Err(SearchError::NotConfigured);
        }

        let ingredients = query.ingredients.join(",+");
        let number = self.results.to_string();

        let recipes = match &query.cuisine {
            Some(cuisine) => {
                let params = [
                    ("includeIngredients", ingredients),
                    ("cuisine", cuisine.clone()),
                    ("number", number),
                    ("sort", "random".to_string()),
                    ("addRecipeInformation", "true".to_string()),
                    ("addRecipeInstructions", "false".to_string()),
                    ("addRecipeNutrition", "true".to_string()),
                ];
                let response: ComplexSearchResponse =
                    self.get("/recipes/complexSearch", &params).await?;
                response
                    .results
                    .into_iter()
                    .map(|recipe| recipe.into_recipe(true))
                    .collect::<Vec<_>>()
            }
            None => {
                let params = [
                    ("ingredients", ingredients),
                    ("number", number),
                    ("ranking", "1".to_string()),
                    ("ignorePantry", "true".to_string()),
                ];
                let response: Vec<SpoonacularRecipe> =
                    self.get("/recipes/findByIngredients", &params).await?;
                response
                    .into_iter()
                    .map(|recipe| recipe.into_recipe(false))
                    .collect()
            }
        };

        tracing::debug!(count = recipes.len(), "Recipe search completed");

        Ok(recipes)
    }
}

#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<SpoonacularRecipe>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SpoonacularRecipe {
    id: u64,
    title: String,
    #[serde(default)]
    image: String,
    source_url: Option<String>,
    ready_in_minutes: Option<u32>,
    servings: Option<u32>,
    health_score: Option<f64>,
    cheap: Option<bool>,
    dairy_free: Option<bool>,
    gluten_free: Option<bool>,
    ketogenic: Option<bool>,
    vegan: Option<bool>,
    vegetarian: Option<bool>,
    very_healthy: Option<bool>,
    very_popular: Option<bool>,
    whole30: Option<bool>,
}

/// Recipe page on spoonacular.com, built from the title and id.
pub fn recipe_page_url(title: &str, id: u64) -> String {
    let slug = RE_WHITESPACE.replace_all(title, "-").to_lowercase();
    format!("https://spoonacular.com/recipes/{slug}-{id}")
}

impl SpoonacularRecipe {
    /// `keep_source_url`: use the provider's link when it has one.
    fn into_recipe(self, keep_source_url: bool) -> Recipe {
        let source_url = match self.source_url {
            Some(url) if keep_source_url && !url.is_empty() => url,
            _ => recipe_page_url(&self.title, self.id),
        };

        Recipe {
            id: Some(self.id),
            title: self.title,
            image: self.image,
            source_url: Some(source_url),
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            health_score: self.health_score,
            cheap: self.cheap,
            dairy_free: self.dairy_free,
            gluten_free: self.gluten_free,
            ketogenic: self.ketogenic,
            vegan: self.vegan,
            vegetarian: self.vegetarian,
            very_healthy: self.very_healthy,
            very_popular: self.very_popular,
            whole30: self.whole30,
        }
    }
}
