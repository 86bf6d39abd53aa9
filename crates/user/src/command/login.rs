use argon2::{Argon2, PasswordHash, PasswordVerifier};
use serde::Deserialize;
use validator::Validate;

use crate::{User, repository};

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
pub struct LoginInput {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    pub async fn login(&self, input: LoginInput) -> sufra_shared::Result<User> {
        input.validate()?;

        let Some(user) = repository::find(
            &self.state.read_db,
            repository::FindType::Email(input.email.trim().to_lowercase()),
        )
        .await?
        else {
            sufra_shared::unauthorized!("Invalid credentials");
        };

        let parsed_hash = PasswordHash::new(&user.password)?;
        let argon2 = Argon2::default();

        if argon2
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            sufra_shared::unauthorized!("Invalid credentials");
        }

        Ok(user.into())
    }
}
