//! Shared data model for Cave Crawl cave definitions.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_cave};
