use std::sync::Arc;

use weft_core::{EntryId, Model, Polymorphic, RawEntry, Resolver};

use crate::models::{Author, Category, Collection, Post};

/// Any entry of the blog schema, for links that may name several types.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Post(Arc<Post>),
    Author(Arc<Author>),
    Category(Arc<Category>),
    Collection(Arc<Collection>),
}

impl Entry {
    /// The ID of the wrapped entry.
    pub fn id(&self) -> &EntryId {
        match self {
            Entry::Post(post) => &post.id,
            Entry::Author(author) => &author.id,
            Entry::Category(category) => &category.id,
            Entry::Collection(collection) => &collection.id,
        }
    }

    /// The content type of the wrapped entry.
    pub fn content_type(&self) -> &'static str {
        match self {
            Entry::Post(_) => Post::CONTENT_TYPE,
            Entry::Author(_) => Author::CONTENT_TYPE,
            Entry::Category(_) => Category::CONTENT_TYPE,
            Entry::Collection(_) => Collection::CONTENT_TYPE,
        }
    }

    /// The wrapped Post, or `None` for other variants.
    pub fn as_post(&self) -> Option<&Post> {
        match self {
            Entry::Post(post) => Some(&**post),
            _ => None,
        }
    }

    /// The wrapped Author, or `None` for other variants.
    pub fn as_author(&self) -> Option<&Author> {
        match self {
            Entry::Author(author) => Some(&**author),
            _ => None,
        }
    }

    /// The wrapped Category, or `None` for other variants.
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            Entry::Category(category) => Some(&**category),
            _ => None,
        }
    }

    /// The wrapped Collection, or `None` for other variants.
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Entry::Collection(collection) => Some(&**collection),
            _ => None,
        }
    }
}

impl Polymorphic for Entry {
    fn dispatch(entry: &RawEntry, resolver: &mut Resolver<'_>) -> Option<Self> {
        let tag = entry.content_type().as_str();
        if tag == Post::CONTENT_TYPE {
            resolver.resolve_entry::<Post>(entry).map(Entry::Post)
        } else if tag == Author::CONTENT_TYPE {
            resolver.resolve_entry::<Author>(entry).map(Entry::Author)
        } else if tag == Category::CONTENT_TYPE {
            resolver.resolve_entry::<Category>(entry).map(Entry::Category)
        } else if tag == Collection::CONTENT_TYPE {
            resolver.resolve_entry::<Collection>(entry).map(Entry::Collection)
        } else {
            None
        }
    }
}
