use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{User, repository};

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6, max = 128))]
    pub password: String,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl super::Command {
    pub async fn register(&self, input: RegisterInput) -> sufra_shared::Result<User> {
        let input = RegisterInput {
            email: input.email.trim().to_lowercase(),
            password: input.password,
            name: input.name.trim().to_owned(),
        };

        input.validate()?;

        if repository::find(
            &self.state.read_db,
            repository::FindType::Email(input.email.to_owned()),
        )
        .await?
        .is_some()
        {
            sufra_shared::user!("User already exists");
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let user = User {
            id: Ulid::new().to_string(),
            email: input.email,
            name: input.name,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };

        let created = repository::create(
            &self.state.write_db,
            repository::CreateInput {
                id: user.id.to_owned(),
                email: user.email.to_owned(),
                name: user.name.to_owned(),
                password: password_hash,
                created_at: user.created_at,
            },
        )
        .await;

        match created {
            Ok(_) => {}
            Err(sufra_shared::Error::Unknown(err))
                if err
                    .downcast_ref::<sqlx::Error>()
                    .is_some_and(is_unique_violation) =>
            {
                sufra_shared::user!("User already exists");
            }
            Err(err) => return Err(err),
        }

        tracing::info!(user_id = %user.id, "user registered");

        Ok(user)
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
