use sufra_shared::State;

use crate::{GroceryItem, aggregate};

#[derive(Clone)]
pub struct Query {
    meal_plans: sufra_mealplan::Query,
}

impl Query {
    pub fn new(state: State) -> Self {
        Self {
            meal_plans: sufra_mealplan::Query::new(state),
        }
    }

    /// Aggregated groceries for every meal the user has planned.
    pub async fn grocery_list(
        &self,
        user_id: impl Into<String>,
    ) -> sufra_shared::Result<Vec<GroceryItem>> {
        let planned = self.meal_plans.list(user_id).await?;
        let items = aggregate(planned.iter().map(|p| p.recipe.ingredients.as_slice()));

        tracing::debug!(meals = planned.len(), items = items.len(), "grocery list built");

        Ok(items)
    }
}
