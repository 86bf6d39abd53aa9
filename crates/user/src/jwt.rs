use anyhow::{Context, Result};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
    pub iat: u64,
}

/// Signs an HS256 token for `user_id` valid for `lifetime_days`.
pub fn generate(user_id: impl Into<String>, secret: &str, lifetime_days: u64) -> Result<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp() as u64;

    let claims = Claims {
        sub: user_id.into(),
        exp: now + lifetime_days * 24 * 60 * 60,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT")
}

pub fn validate(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT")?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_generate_and_validate() {
        let token = generate("01JBQ7Y4W9V8T6S5R4Q3P2N1M0", SECRET, 30).unwrap();
        let claims = validate(&token, SECRET).unwrap();

        assert_eq!(claims.sub, "01JBQ7Y4W9V8T6S5R4Q3P2N1M0");
        assert_eq!(claims.exp - claims.iat, 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_invalid_secret_fails_validation() {
        let token = generate("user", SECRET, 1).unwrap();

        assert!(validate(&token, "wrong_secret_wrong_secret_wrong_secret").is_err());
    }

    #[test]
    fn test_expired_token_fails_validation() {
        let now = OffsetDateTime::now_utc().unix_timestamp() as u64;
        let claims = Claims {
            sub: "user".to_owned(),
            exp: now - 3600,
            iat: now - 7200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(validate(&token, SECRET).is_err());
    }

    #[test]
    fn test_garbage_token_fails_validation() {
        assert!(validate("not-a-token", SECRET).is_err());
    }
}
