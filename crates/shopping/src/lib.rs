pub mod aggregation;
mod query;

pub use aggregation::{GroceryItem, aggregate, group_by_initial, to_plain_text};
pub use query::*;
