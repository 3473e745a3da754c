//! weft-blog - typed models for a blog space
//!
//! Four content types link to each other, with cycles:
//!
//! | Type         | Links, in resolution order                                         |
//! |--------------|--------------------------------------------------------------------|
//! | [`Post`]       | `approver` (Author), `author` (Authors), `byline` (Author or Post), `category` (Categories), `related` (any) |
//! | [`Author`]     | `created_entries` (Posts)                                          |
//! | [`Category`]   | `parent` (Category)                                                |
//! | [`Collection`] | `featured` (any), `children` (Collections)                         |
//!
//! Links to a single other type are held by value, self links through
//! [`Arc`](std::sync::Arc), and links that may name several types as an
//! [`Entry`].

mod entry;
pub mod models;
mod schema;

pub use entry::Entry;
pub use models::{Author, Category, Collection, Post};
pub use schema::{SCHEMA_JSON, schema};
