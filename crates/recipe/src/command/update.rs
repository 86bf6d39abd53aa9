use time::OffsetDateTime;
use validator::Validate;

use crate::{Recipe, repository};

pub struct UpdateInput {
    pub id: String,
    pub recipe: super::CreateInput,
}

impl super::Command {
    pub async fn update(
        &self,
        input: UpdateInput,
        request_by: impl Into<String>,
    ) -> sufra_shared::Result<Recipe> {
        let fields = input.recipe.normalize();
        fields.validate()?;

        let request_by = request_by.into();

        let Some(current) =
            repository::find(&self.state.read_db, input.id, request_by.to_owned()).await?
        else {
            sufra_shared::not_found!("Recipe not found");
        };

        let nutrition = self.nutrition(&fields.ingredients).await;

        let recipe = Recipe {
            id: current.id,
            user_id: current.user_id,
            title: fields.title,
            ingredients: fields.ingredients,
            steps: fields.steps,
            tags: fields.tags,
            nutrition,
            image_url: fields.image_url,
            created_at: current.created_at,
            updated_at: Some(OffsetDateTime::now_utc().unix_timestamp()),
        };

        if repository::update(&self.state.write_db, &recipe).await? == 0 {
            sufra_shared::not_found!("Recipe not found");
        }

        Ok(recipe)
    }
}
