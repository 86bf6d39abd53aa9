use std::collections::HashMap;

use sufra_shared::State;

use crate::{MealPlan, PlannedMeal, repository};

#[derive(Clone)]
pub struct Query {
    state: State,
    recipes: sufra_recipe::Query,
}

impl Query {
    pub fn new(state: State) -> Self {
        Self {
            recipes: sufra_recipe::Query::new(state.clone()),
            state,
        }
    }

    /// The user's entries in creation order, each with its recipe. Entries
    /// whose recipe no longer resolves are left out.
    pub async fn list(&self, user_id: impl Into<String>) -> sufra_shared::Result<Vec<PlannedMeal>> {
        let user_id = user_id.into();
        let entries: Vec<MealPlan> = repository::list(&self.state.read_db, user_id.to_owned())
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        let mut ids: Vec<String> = entries.iter().map(|e| e.recipe_id.to_owned()).collect();
        ids.sort();
        ids.dedup();

        let recipes: HashMap<String, sufra_recipe::Recipe> = self
            .recipes
            .find_many(ids, user_id)
            .await?
            .into_iter()
            .map(|r| (r.id.to_owned(), r))
            .collect();

        Ok(entries
            .into_iter()
            .filter_map(|entry| {
                let recipe = recipes.get(&entry.recipe_id).cloned()?;
                Some(PlannedMeal { entry, recipe })
            })
            .collect())
    }
}
