//! Utility modules

pub mod fuzzy;

pub use fuzzy::{fuzzy_eq, similarity, DEFAULT_THRESHOLD};
