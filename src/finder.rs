//! The recipe search request: validate, search, then recommend.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smart_recipe_advisor::{
    AiRecommendationContext, CookingTimePreference, FallbackContext, StdRandom,
    generate_dynamic_prompt, generate_enhanced_user_prompt, generate_smart_recommendation,
};
use smart_recipe_shared::{Recipe, normalize_ingredients};
use thiserror::Error;

use crate::{
    llm::LlmProvider,
    spoonacular::{RecipeSearch, SearchError, SearchQuery},
};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeRequest {
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub recipes: Vec<Recipe>,
    pub ai_suggestion: String,
}

#[derive(Debug, Error)]
pub enum FindError {
    #[error("Ingredients are required")]
    MissingIngredients,

    #[error(transparent)]
    Search(#[from] SearchError),
}

#[derive(Debug, Clone)]
pub struct RecipeFinder {
    search: Arc<dyn RecipeSearch>,
    llm: Arc<dyn LlmProvider>,
    fallback_seed: Option<u64>,
}

impl RecipeFinder {
    pub fn new(
        search: Arc<dyn RecipeSearch>,
        llm: Arc<dyn LlmProvider>,
        fallback_seed: Option<u64>,
    ) -> Self {
        Self {
            search,
            llm,
            fallback_seed,
        }
    }

    /// Search recipes for the request and attach a recommendation.
    ///
    /// Only the search can fail the request: a failing language model is
    /// replaced by the local recommendation.
    #[tracing::instrument(skip(self, request), fields(llm = self.llm.provider_name()))]
    pub async fn find(&self, request: RecipeRequest) -> Result<RecipeResponse, FindError> {
        let ingredients = normalize_ingredients(request.ingredients.as_deref().unwrap_or_default());
        if ingredients.is_empty() {
            return Err(FindError::MissingIngredients);
        }

        let cuisine = request
            .cuisine
            .map(|cuisine| cuisine.trim().to_string())
            .filter(|cuisine| !cuisine.is_empty());

        let query = SearchQuery {
            ingredients,
            cuisine,
        };
        let recipes = self.search.search(&query).await?;
        tracing::info!(count = recipes.len(), cuisine = ?query.cuisine, "Recipes found");

        let ai_suggestion = self.recommend(&query, &recipes).await;

        Ok(RecipeResponse {
            recipes,
            ai_suggestion,
        })
    }

    async fn recommend(&self, query: &SearchQuery, recipes: &[Recipe]) -> String {
        let context = AiRecommendationContext {
            ingredients: query.ingredients.clone(),
            cuisine: query.cuisine.clone(),
            recipes: recipes.iter().map(Recipe::summary).collect(),
            cooking_time_preference: Some(CookingTimePreference::Any),
            ..Default::default()
        };

        let system_prompt = generate_dynamic_prompt(&context);
        let user_prompt = generate_enhanced_user_prompt(&context);

        match self.llm.complete(&system_prompt, &user_prompt).await {
            Ok(suggestion) => suggestion,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    provider = self.llm.provider_name(),
                    model = self.llm.model_name(),
                    "Language model unavailable, using local recommendation"
                );

                generate_smart_recommendation(
                    &FallbackContext {
                        recipes,
                        ingredients: &query.ingredients,
                        cuisine: query.cuisine.as_deref(),
                    },
                    &mut StdRandom::from_seed(self.fallback_seed),
                )
            }
        }
    }
}
