//! POST /api/recipes through the router

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use helpers::{
    Failure, FakeSearch, body_json, json_request, raw_request, sample_recipes, send, test_app,
};
use serde_json::json;
use smart_recipe::{llm::FakeProvider, spoonacular::SearchQuery};

#[tokio::test]
async fn test_missing_ingredients_rejected_before_search() -> anyhow::Result<()> {
    let search = FakeSearch::returning(sample_recipes());
    let app = test_app(search.clone(), Arc::new(FakeProvider::default()));

    for body in [json!({}), json!({"ingredients": ""}), json!({"ingredients": " , ,"})] {
        let response = send(&app, json_request("POST", "/api/recipes", body)).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await?,
            json!({"error": "Ingredients are required"})
        );
    }

    assert!(search.queries().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_search_failures_surface_as_errors() -> anyhow::Result<()> {
    let cases = [
        (
            Failure::Unauthorized,
            StatusCode::UNAUTHORIZED,
            "API authentication failed. Please check the configuration.",
        ),
        (
            Failure::QuotaExceeded,
            StatusCode::PAYMENT_REQUIRED,
            "API quota exceeded. Please try again later.",
        ),
        (
            Failure::NotConfigured,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch recipes. Please try again.",
        ),
        (
            Failure::Upstream,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch recipes. Please try again.",
        ),
    ];

    for (failure, status, message) in cases {
        let app = test_app(FakeSearch::failing(failure), Arc::new(FakeProvider::default()));
        let response = send(
            &app,
            json_request("POST", "/api/recipes", json!({"ingredients": "rice"})),
        )
        .await?;

        assert_eq!(response.status(), status, "{failure:?}");
        assert_eq!(body_json(response).await?, json!({ "error": message }));
    }

    Ok(())
}

#[tokio::test]
async fn test_language_model_suggestion_is_returned() -> anyhow::Result<()> {
    let llm = FakeProvider::with_response("1. Chicken Pasta (25 minutes)", "Make the Chicken Pasta.");
    let app = test_app(FakeSearch::returning(sample_recipes()), Arc::new(llm));

    let response = send(
        &app,
        json_request("POST", "/api/recipes", json!({"ingredients": "chicken, garlic"})),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["aiSuggestion"], "Make the Chicken Pasta.");
    assert_eq!(body["recipes"][0]["title"], "Chicken Pasta");
    assert_eq!(body["recipes"][0]["readyInMinutes"], 25);
    assert_eq!(
        body["recipes"][0]["sourceUrl"],
        "https://spoonacular.com/recipes/chicken-pasta-42"
    );
    assert!(body["recipes"][0].get("vegan").is_none());
    assert_eq!(body["recipes"].as_array().map(Vec::len), Some(2));

    Ok(())
}

#[tokio::test]
async fn test_failing_language_model_uses_local_recommendation() -> anyhow::Result<()> {
    let search = FakeSearch::returning(sample_recipes());
    let app = test_app(search.clone(), Arc::new(FakeProvider::failing()));

    let response = send(
        &app,
        json_request(
            "POST",
            "/api/recipes",
            json!({"ingredients": " chicken ,, garlic ", "cuisine": " italian "}),
        ),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    let suggestion = body["aiSuggestion"].as_str().unwrap_or_default();
    assert!(suggestion.starts_with(
        "This italian dish perfectly matches your preference! I recommend \"Chicken Pasta\""
    ));
    assert!(suggestion.ends_with("This dish provides good protein for muscle maintenance and satiety."));

    assert_eq!(
        search.queries(),
        vec![SearchQuery {
            ingredients: vec!["chicken".to_string(), "garlic".to_string()],
            cuisine: Some("italian".to_string()),
        }]
    );

    Ok(())
}

#[tokio::test]
async fn test_blank_cuisine_is_ignored() -> anyhow::Result<()> {
    let search = FakeSearch::returning(sample_recipes());
    let app = test_app(search.clone(), Arc::new(FakeProvider::default()));

    let response = send(
        &app,
        json_request("POST", "/api/recipes", json!({"ingredients": "rice", "cuisine": "   "})),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(search.queries()[0].cuisine, None);

    Ok(())
}

#[tokio::test]
async fn test_no_recipes_suggests_substitutions() -> anyhow::Result<()> {
    let app = test_app(FakeSearch::returning(Vec::new()), Arc::new(FakeProvider::failing()));

    let response = send(
        &app,
        json_request("POST", "/api/recipes", json!({"ingredients": "chicken"})),
    )
    .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    assert_eq!(body["recipes"], json!([]));
    assert!(
        body["aiSuggestion"]
            .as_str()
            .unwrap_or_default()
            .contains("chicken → tofu or paneer or chickpeas or white beans")
    );

    Ok(())
}

#[tokio::test]
async fn test_fixed_seed_gives_repeatable_fallback() -> anyhow::Result<()> {
    let app = test_app(
        FakeSearch::returning(sample_recipes()),
        Arc::new(FakeProvider::failing()),
    );
    let request = || json_request("POST", "/api/recipes", json!({"ingredients": "flour"}));

    let first = body_json(send(&app, request()).await?).await?;
    let second = body_json(send(&app, request()).await?).await?;
    assert_eq!(first["aiSuggestion"], second["aiSuggestion"]);

    Ok(())
}

#[tokio::test]
async fn test_unreadable_request_body_is_a_json_error() -> anyhow::Result<()> {
    let search = FakeSearch::returning(sample_recipes());
    let app = test_app(search.clone(), Arc::new(FakeProvider::default()));

    let bodies = [
        ("application/json", "{not json"),
        ("application/json", r#"{"ingredients": 5}"#),
        ("text/plain", r#"{"ingredients": "rice"}"#),
    ];

    for (content_type, body) in bodies {
        let response = send(&app, raw_request("POST", "/api/recipes", content_type, body)).await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await?,
            json!({"error": "Failed to fetch recipes. Please try again."})
        );
    }

    assert!(search.queries().is_empty());
    Ok(())
}
