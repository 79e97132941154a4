//! Test helpers for driving the router in-process
//!
//! The recipe search and the language model are replaced by fakes, and the
//! saved collection lives in memory.

#![allow(dead_code)]

use std::sync::{Arc, Mutex as StdMutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use smart_recipe::{
    AppState, Config,
    config::{
        FallbackConfig, LlmConfig, ObservabilityConfig, ServerConfig, SpoonacularConfig,
        StorageConfig,
    },
    finder::RecipeFinder,
    llm::{FakeProvider, LlmProvider},
    spoonacular::{RecipeSearch, SearchError, SearchQuery},
};
use smart_recipe_saved::{MemoryStorage, SavedRecipes, StorageBackend};
use smart_recipe_shared::Recipe;
use tower::ServiceExt;

/// Canned search outcome, recording every query it receives.
#[derive(Debug)]
pub struct FakeSearch {
    outcome: Outcome,
    pub queries: StdMutex<Vec<SearchQuery>>,
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    NotConfigured,
    Unauthorized,
    QuotaExceeded,
    Upstream,
}

#[derive(Debug)]
enum Outcome {
    Recipes(Vec<Recipe>),
    Fail(Failure),
}

impl FakeSearch {
    pub fn returning(recipes: Vec<Recipe>) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Recipes(recipes),
            queries: StdMutex::new(Vec::new()),
        })
    }

    pub fn failing(failure: Failure) -> Arc<Self> {
        Arc::new(Self {
            outcome: Outcome::Fail(failure),
            queries: StdMutex::new(Vec::new()),
        })
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSearch for FakeSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Recipe>, SearchError> {
        self.queries.lock().unwrap().push(query.clone());

        match &self.outcome {
            Outcome::Recipes(recipes) => Ok(recipes.clone()),
            Outcome::Fail(Failure::NotConfigured) => Err(SearchError::NotConfigured),
            Outcome::Fail(Failure::Unauthorized) => Err(SearchError::Unauthorized),
            Outcome::Fail(Failure::QuotaExceeded) => Err(SearchError::QuotaExceeded),
            Outcome::Fail(Failure::Upstream) => Err(SearchError::Status(503)),
        }
    }
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig::default(),
        spoonacular: SpoonacularConfig::default(),
        llm: LlmConfig::default(),
        fallback: FallbackConfig { seed: Some(7) },
        storage: StorageConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub fn test_state(
    search: Arc<dyn RecipeSearch>,
    llm: Arc<dyn LlmProvider>,
    storage: Box<dyn StorageBackend>,
) -> AppState {
    AppState {
        finder: RecipeFinder::new(search, llm, test_config().fallback.seed),
        saved: Arc::new(tokio::sync::Mutex::new(SavedRecipes::load(storage))),
    }
}

/// App with the given search and language model and an empty in-memory
/// saved collection.
pub fn test_app(search: Arc<dyn RecipeSearch>, llm: Arc<dyn LlmProvider>) -> Router {
    smart_recipe::create_app(test_state(search, llm, Box::new(MemoryStorage::new())))
}

pub fn saved_app(storage: Box<dyn StorageBackend>) -> Router {
    smart_recipe::create_app(test_state(
        FakeSearch::returning(Vec::new()),
        Arc::new(FakeProvider::default()),
        storage,
    ))
}

pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<Response> {
    Ok(app.clone().oneshot(request).await?)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Request with a body sent verbatim under the given content type.
pub fn raw_request(method: &str, uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();
    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn body_json(response: Response) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::from_str(&body_text(response).await?)?)
}

pub fn sample_recipes() -> Vec<Recipe> {
    let mut pasta = Recipe::new("Chicken Pasta").with_id(42).ready_in(25);
    pasta.image = "https://img.spoonacular.com/recipes/42-312x231.jpg".to_string();
    pasta.source_url = Some("https://spoonacular.com/recipes/chicken-pasta-42".to_string());
    pasta.servings = Some(2);

    vec![pasta, Recipe::new("Garlic Bread").with_id(43).ready_in(45)]
}
