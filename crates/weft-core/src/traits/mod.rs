//! Core traits for typed models and page sources.

mod model;
mod source;

pub use model::{Model, Polymorphic};
pub use source::{PageQuery, PageSource};
