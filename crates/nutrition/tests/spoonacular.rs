use std::{collections::HashMap, time::Duration};

use axum::{
    Form, Json, Router,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::json;
use sufra_nutrition::{Disabled, NutritionLookup, Spoonacular};
use sufra_shared::recipe::{Ingredient, Nutrition};

async fn parse_ingredients(
    Query(query): Query<HashMap<String, String>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    if query.get("apiKey").map(String::as_str) != Some("test-key") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    assert_eq!(form.get("includeNutrition").map(String::as_str), Some("true"));
    assert_eq!(form.get("servings").map(String::as_str), Some("1"));

    let items: Vec<_> = form
        .get("ingredientList")
        .map(|list| list.lines().collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .map(|line| {
            json!({
                "original": line,
                "nutrition": {
                    "nutrients": [
                        { "name": "Calories", "amount": 110.25, "unit": "kcal" },
                        { "name": "Protein", "amount": 3.1, "unit": "g" },
                        { "name": "Fat", "amount": 0.4, "unit": "g" },
                        { "name": "Carbohydrates", "amount": 23.0, "unit": "g" }
                    ]
                }
            })
        })
        .collect();

    Json(items).into_response()
}

async fn spawn_stub() -> anyhow::Result<String> {
    let app = Router::new().route("/recipes/parseIngredients", post(parse_ingredients));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(format!("http://{addr}"))
}

fn ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("flour", 2.0, "cups"),
        Ingredient::new("sugar", 100.0, "g"),
    ]
}

#[tokio::test]
async fn lookup_sums_parsed_ingredients() -> anyhow::Result<()> {
    let base_url = spawn_stub().await?;
    let lookup = Spoonacular::new("test-key", base_url, Duration::from_secs(5))?;

    let nutrition = lookup.lookup(&ingredients()).await?;

    assert_eq!(
        nutrition,
        Nutrition {
            calories: 221.0,
            protein: 6.0,
            fat: 1.0,
            carbs: 46.0,
        }
    );

    Ok(())
}

#[tokio::test]
async fn lookup_fails_on_rejected_key() -> anyhow::Result<()> {
    let base_url = spawn_stub().await?;
    let lookup = Spoonacular::new("wrong-key", base_url, Duration::from_secs(5))?;

    assert!(lookup.lookup(&ingredients()).await.is_err());

    Ok(())
}

#[tokio::test]
async fn lookup_skips_request_without_ingredients() -> anyhow::Result<()> {
    let lookup = Spoonacular::new("test-key", "http://127.0.0.1:9", Duration::from_secs(1))?;

    assert_eq!(lookup.lookup(&[]).await?, Nutrition::default());

    Ok(())
}

#[tokio::test]
async fn disabled_lookup_returns_zeros() -> anyhow::Result<()> {
    assert_eq!(Disabled.lookup(&ingredients()).await?, Nutrition::default());

    Ok(())
}
