//! Core data model shared by every stage of the engine.

pub mod dimension;
pub mod errors;
pub mod item;

pub use dimension::FilterDimension;
pub use errors::{Error, Result, ResultExt};
pub use item::{load_items, parse_items, Item, Maturity};
