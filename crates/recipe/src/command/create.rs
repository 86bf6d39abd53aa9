use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{Recipe, repository};

impl super::Command {
    pub async fn create(
        &self,
        input: super::CreateInput,
        request_by: impl Into<String>,
    ) -> sufra_shared::Result<Recipe> {
        let input = input.normalize();
        input.validate()?;

        let nutrition = self.nutrition(&input.ingredients).await;

        let recipe = Recipe {
            id: Ulid::new().to_string(),
            user_id: request_by.into(),
            title: input.title,
            ingredients: input.ingredients,
            steps: input.steps,
            tags: input.tags,
            nutrition,
            image_url: input.image_url,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
            updated_at: None,
        };

        repository::create(&self.state.write_db, &recipe).await?;

        tracing::info!(recipe_id = %recipe.id, user_id = %recipe.user_id, "recipe created");

        Ok(recipe)
    }
}
