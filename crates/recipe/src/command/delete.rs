use crate::repository;

impl super::Command {
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> sufra_shared::Result<()> {
        let id = id.into();
        let deleted =
            repository::delete(&self.state.write_db, id.to_owned(), request_by.into()).await?;

        if deleted == 0 {
            sufra_shared::not_found!("Recipe not found");
        }

        tracing::info!(recipe_id = %id, "recipe deleted");

        Ok(())
    }
}
