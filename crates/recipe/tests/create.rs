use std::sync::Arc;

use sufra_recipe::CreateInput;
use sufra_shared::recipe::{Ingredient, Nutrition};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn create_stores_recipe_with_nutrition() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let recipe = cmd
        .create(
            CreateInput {
                title: "  Pancakes ".to_owned(),
                steps: vec!["Mix".to_owned(), "   ".to_owned()],
                ..helpers::pancakes()
            },
            "user-1",
        )
        .await?;

    assert_eq!(recipe.title, "Pancakes");
    assert_eq!(recipe.steps, vec!["Mix".to_owned()]);
    assert_eq!(recipe.nutrition.calories, 420.0);
    assert_eq!(recipe.updated_at, None);

    let query = sufra_recipe::Query::new(state);
    let found = query.find(&recipe.id, "user-1").await?;
    assert_eq!(found, Some(recipe.clone()));
    assert_eq!(query.find(&recipe.id, "user-2").await?, None);

    Ok(())
}

#[tokio::test]
async fn create_defaults_missing_unit() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let input: CreateInput = serde_json::from_str(
        r#"{"title":"Salad","ingredients":[{"name":"tomato","amount":2}],"steps":["Chop"]}"#,
    )?;
    let recipe = cmd.create(input, "user-1").await?;

    assert_eq!(recipe.ingredients, vec![Ingredient::new("tomato", 2.0, "")]);
    assert!(recipe.tags.is_empty());
    assert_eq!(recipe.image_url, "");

    Ok(())
}

#[tokio::test]
async fn create_rejects_incomplete_recipe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = helpers::command(&state);

    let err = cmd
        .create(
            CreateInput {
                title: " ".to_owned(),
                ingredients: vec![],
                steps: vec![],
                ..Default::default()
            },
            "user-1",
        )
        .await
        .unwrap_err();

    let sufra_shared::Error::Validate(errors) = err else {
        panic!("expected validation error, got {err}");
    };
    let fields = errors.errors();
    assert!(fields.contains_key("title"));
    assert!(fields.contains_key("ingredients"));
    assert!(fields.contains_key("steps"));

    let err = cmd
        .create(
            CreateInput {
                ingredients: vec![Ingredient::new("", 1.0, "cup"), Ingredient::new("salt", -1.0, "g")],
                ..helpers::pancakes()
            },
            "user-1",
        )
        .await
        .unwrap_err();
    assert!(matches!(err, sufra_shared::Error::Validate(_)));

    Ok(())
}

#[tokio::test]
async fn create_falls_back_to_zero_nutrition() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = sufra_recipe::Command::new(state, Arc::new(helpers::FailingLookup));

    let recipe = cmd.create(helpers::pancakes(), "user-1").await?;

    assert_eq!(recipe.nutrition, Nutrition::default());

    Ok(())
}
