//! Subcommand implementations.

pub mod entries;
pub mod locales;
pub mod posts;
pub mod schema;
