//! Blog content models.

mod author;
mod category;
mod collection;
mod post;

pub use author::{Author, AuthorFields};
pub use category::{Category, CategoryFields};
pub use collection::{Collection, CollectionFields};
pub use post::{Post, PostFields};
