mod command;
pub mod jwt;
mod query;
pub(crate) mod repository;

pub use command::*;
pub use query::*;

use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: i64,
}
