pub mod localize;

pub use localize::localize_errors;
