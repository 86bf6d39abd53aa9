use serde::Deserialize;
use sufra_shared::mealplan::{Day, MealType};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{MealPlan, repository};

#[derive(Deserialize, Validate, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AssignInput {
    pub day: Day,
    pub meal_type: MealType,
    #[validate(length(min = 1, max = 26))]
    pub recipe_id: String,
}

impl super::Command {
    /// Puts a recipe in a (day, meal type) slot. The returned flag is true
    /// when the slot was empty before.
    pub async fn assign(
        &self,
        input: AssignInput,
        request_by: impl Into<String>,
    ) -> sufra_shared::Result<(MealPlan, bool)> {
        input.validate()?;

        let request_by = request_by.into();

        if self
            .recipes
            .find(&input.recipe_id, &request_by)
            .await?
            .is_none()
        {
            sufra_shared::not_found!("Recipe not found");
        }

        let entry = MealPlan {
            id: Ulid::new().to_string(),
            user_id: request_by,
            day: input.day,
            meal_type: input.meal_type,
            recipe_id: input.recipe_id,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
            updated_at: None,
        };

        let stored: MealPlan = repository::upsert(&self.state.write_db, &entry)
            .await?
            .into();
        let created = stored.id == entry.id;

        tracing::info!(
            meal_plan_id = %stored.id,
            day = %stored.day,
            meal_type = %stored.meal_type,
            created,
            "meal plan assigned"
        );

        Ok((stored, created))
    }
}
