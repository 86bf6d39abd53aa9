use crate::repository;

impl super::Command {
    pub async fn delete(
        &self,
        id: impl Into<String>,
        request_by: impl Into<String>,
    ) -> sufra_shared::Result<()> {
        let deleted = repository::delete(&self.state.write_db, id.into(), request_by.into()).await?;

        if deleted == 0 {
            sufra_shared::not_found!("Meal plan not found");
        }

        Ok(())
    }
}
