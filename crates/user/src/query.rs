use sufra_shared::State;

use crate::{User, repository};

#[derive(Clone)]
pub struct Query {
    state: State,
}

impl Query {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub async fn find(&self, id: impl Into<String>) -> sufra_shared::Result<Option<User>> {
        let row = repository::find(&self.state.read_db, repository::FindType::Id(id.into())).await?;

        Ok(row.map(Into::into))
    }

    pub async fn find_by_email(
        &self,
        email: impl AsRef<str>,
    ) -> sufra_shared::Result<Option<User>> {
        let email = email.as_ref().trim().to_lowercase();
        let row = repository::find(&self.state.read_db, repository::FindType::Email(email)).await?;

        Ok(row.map(Into::into))
    }
}
