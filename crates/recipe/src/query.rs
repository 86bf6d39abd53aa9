use sufra_shared::State;

use crate::{Recipe, repository};

#[derive(Clone)]
pub struct Query {
    state: State,
}

impl Query {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    /// The user's recipes, newest first.
    pub async fn list(&self, user_id: impl Into<String>) -> sufra_shared::Result<Vec<Recipe>> {
        let rows = repository::filter(&self.state.read_db, user_id.into(), None).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub async fn find(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> sufra_shared::Result<Option<Recipe>> {
        let row = repository::find(&self.state.read_db, id.into(), user_id.into()).await?;

        Ok(row.map(Into::into))
    }

    /// Resolves the given ids among the user's recipes. Unknown ids are skipped.
    pub async fn find_many(
        &self,
        ids: Vec<String>,
        user_id: impl Into<String>,
    ) -> sufra_shared::Result<Vec<Recipe>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = repository::filter(&self.state.read_db, user_id.into(), Some(ids)).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
