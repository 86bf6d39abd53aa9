#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sufra::config::{
    Config, DatabaseConfig, JwtConfig, NutritionConfig, ObservabilityConfig, ServerConfig,
};
use temp_dir::TempDir;
use tower::ServiceExt;

pub const SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub struct TestApp {
    router: Router,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).unwrap()
    }
}

pub fn config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: SECRET.to_string(),
            expiration_days: 30,
            cookie_max_age_days: 7,
        },
        nutrition: NutritionConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = sufra::db::create_pool(&url, 1).await?;
    sufra::db::migrate(&pool).await?;

    Ok(TestApp {
        router: sufra::create_app(config(), pool, Arc::new(sufra_nutrition::Disabled)),
        _dir: dir,
    })
}

pub struct Call<'a> {
    method: Method,
    uri: &'a str,
    token: Option<&'a str>,
    cookie: Option<String>,
    language: Option<&'a str>,
    body: Option<Value>,
}

impl<'a> Call<'a> {
    pub fn new(method: Method, uri: &'a str) -> Self {
        Self {
            method,
            uri,
            token: None,
            cookie: None,
            language: None,
            body: None,
        }
    }

    pub fn token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    pub fn cookie(mut self, token: &str) -> Self {
        self.cookie = Some(format!("token={token}"));
        self
    }

    pub fn language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

impl TestApp {
    pub async fn call(&self, call: Call<'_>) -> TestResponse {
        let mut builder = Request::builder().method(call.method).uri(call.uri);

        if let Some(token) = call.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(cookie) = call.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        if let Some(language) = call.language {
            builder = builder.header(header::ACCEPT_LANGUAGE, language);
        }

        let request = match call.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// Registers a user and returns its token.
    pub async fn register(&self, email: &str) -> String {
        let response = self
            .call(Call::new(Method::POST, "/api/auth/register").json(json!({
                "email": email,
                "password": "secret123",
                "name": "Amal",
            })))
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);

        response.json()["token"].as_str().unwrap().to_owned()
    }

    /// Creates a recipe and returns its id.
    pub async fn create_recipe(&self, token: &str, title: &str, ingredients: Value) -> String {
        let response = self
            .call(
                Call::new(Method::POST, "/api/recipes")
                    .token(token)
                    .json(json!({
                        "title": title,
                        "ingredients": ingredients,
                        "steps": ["Mix", "Cook"],
                    })),
            )
            .await;

        assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);

        response.json()["recipe"]["id"].as_str().unwrap().to_owned()
    }

    pub async fn assign(&self, token: &str, day: &str, meal_type: &str, recipe_id: &str) -> TestResponse {
        self.call(
            Call::new(Method::POST, "/api/meal-plans")
                .token(token)
                .json(json!({ "day": day, "mealType": meal_type, "recipeId": recipe_id })),
        )
        .await
    }
}
