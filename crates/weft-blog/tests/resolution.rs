//! End-to-end resolution of blog pages, including reference cycles.

use std::sync::Arc;

use serde_json::{Value, json};
use weft_blog::{Author, Category, Collection, Entry, Post};
use weft_core::{EntryId, EntryStore, Page, ResolutionCache, Resolver, resolve_page};

fn link(id: &str) -> Value {
    json!({ "sys": { "type": "Link", "linkType": "Entry", "id": id } })
}

fn asset_link(id: &str) -> Value {
    json!({ "sys": { "type": "Link", "linkType": "Asset", "id": id } })
}

fn entry(id: &str, content_type: &str, fields: Value) -> Value {
    json!({
        "sys": {
            "id": id,
            "type": "Entry",
            "contentType": { "sys": { "type": "Link", "linkType": "ContentType", "id": content_type } }
        },
        "fields": fields
    })
}

fn page(items: Vec<Value>, includes: Vec<Value>) -> Page {
    serde_json::from_value(json!({
        "sys": { "type": "Array" },
        "total": items.len(),
        "skip": 0,
        "limit": 100,
        "items": items,
        "includes": {
            "Entry": includes,
            "Asset": [{
                "sys": { "id": "photo" },
                "fields": {
                    "title": "Portrait",
                    "file": {
                        "url": "//images.ctfassets.net/space/photo.jpg",
                        "contentType": "image/jpeg",
                        "details": { "size": 2048, "image": { "width": 640, "height": 480 } }
                    }
                }
            }]
        }
    }))
    .unwrap()
}

fn id(s: &str) -> EntryId {
    EntryId::new(s).unwrap()
}

// ============================================================================
// Acyclic Graphs
// ============================================================================

#[test]
fn test_acyclic_post_is_fully_populated() {
    let page = page(
        vec![entry(
            "p1",
            "post",
            json!({
                "title": "Hello",
                "slug": "hello",
                "body": "First post",
                "tags": ["intro", "meta"],
                "featuredImage": asset_link("photo"),
                "date": "2024-03-01T10:00:00Z",
                "comments": true,
                "approver": link("a1"),
                "author": [link("a1"), link("a2")],
                "category": [link("c1")]
            }),
        )],
        vec![
            entry("a1", "author", json!({ "name": "Alice", "age": 34, "rating": 4.5,
                                          "profilePhoto": asset_link("photo") })),
            entry("a2", "author", json!({ "name": "Bob" })),
            entry("c1", "category", json!({ "title": "news", "parent": link("c0") })),
            entry("c0", "category", json!({ "title": "root" })),
        ],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    let post = &posts[0];

    assert_eq!(post.title, "Hello");
    assert_eq!(post.tags, vec!["intro", "meta"]);
    assert_eq!(post.featured_image.url, "https://images.ctfassets.net/space/photo.jpg");
    assert_eq!(post.date.unwrap().to_string(), "2024-03-01");
    assert!(post.comments);

    assert_eq!(post.approver.name, "Alice");
    assert_eq!(post.approver.age, 34);
    assert_eq!(post.approver.profile_photo.width, 640);

    let names: Vec<&str> = post.author.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);

    assert_eq!(post.category[0].path(), vec!["news", "root"]);
    assert!(post.byline.is_none());
    assert!(post.related.is_empty());
}

#[test]
fn test_category_root_and_child() {
    let page = page(
        vec![
            entry("child", "category", json!({ "title": "child", "parent": link("root") })),
            entry("root", "category", json!({ "title": "root" })),
        ],
        vec![],
    );

    let mut cache = ResolutionCache::new();
    let categories = resolve_page::<Category>(&page, &mut cache);
    let child = &categories[0];
    let parent = child.parent.as_ref().unwrap();
    assert_eq!(parent.title, "root");
    assert!(parent.parent.is_none());

    // The root item resolves to the handle the child already links to.
    assert!(Arc::ptr_eq(parent, &categories[1]));
}

#[test]
fn test_missing_asset_is_zero_value() {
    let page = page(
        vec![entry("c1", "category", json!({ "title": "news", "icon": asset_link("gone") }))],
        vec![],
    );

    let mut cache = ResolutionCache::new();
    let categories = resolve_page::<Category>(&page, &mut cache);
    assert!(categories[0].icon.is_empty());
    assert_eq!(categories[0].icon, weft_core::Asset::default());
}

#[test]
fn test_missing_link_target_is_zero_value() {
    let page = page(
        vec![entry("p1", "post", json!({ "title": "Orphan", "approver": link("nobody") }))],
        vec![],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    assert_eq!(posts[0].approver, Author::default());
}

#[test]
fn test_duplicate_links_resolve_per_link() {
    let page = page(
        vec![entry("p1", "post", json!({ "title": "Twice", "author": [link("a1"), link("a1")] }))],
        vec![entry("a1", "author", json!({ "name": "Alice" }))],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    let names: Vec<&str> = posts[0].author.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Alice"]);
    assert_eq!(cache.count("author"), 1);
}

#[test]
fn test_unusual_ids_resolve() {
    let long = "x".repeat(65);
    let page = page(
        vec![entry(
            "weird:id",
            "post",
            json!({ "title": "Odd ids", "author": [link("bad id"), link(&long)] }),
        )],
        vec![entry(&long, "author", json!({ "name": "Alice" }))],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    assert_eq!(posts[0].id.as_str(), "weird:id");
    assert_eq!(posts[0].title, "Odd ids");
    // The invisible "bad id" link is a miss; the long one resolves.
    let names: Vec<&str> = posts[0].author.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Alice"]);
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_two_node_cycle_from_post() {
    // p1.approver = a1, a1.createdEntries = [p1]
    let page = page(
        vec![entry("p1", "post", json!({ "title": "Loop", "approver": link("a1") }))],
        vec![entry("a1", "author", json!({ "name": "Alice", "createdEntries": [link("p1")] }))],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    let post = &posts[0];

    assert_eq!(post.approver.name, "Alice");
    let closing = &post.approver.created_entries[0];
    assert_eq!(closing.title, "Loop");
    // The cycle closed before `approver` was written.
    assert_eq!(closing.approver, Author::default());
}

#[test]
fn test_two_node_cycle_from_author() {
    let page = page(
        vec![entry("a1", "author", json!({ "name": "Alice", "createdEntries": [link("p1")] }))],
        vec![entry("p1", "post", json!({ "title": "Loop", "approver": link("a1") }))],
    );

    let mut cache = ResolutionCache::new();
    let authors = resolve_page::<Author>(&page, &mut cache);
    let author = &authors[0];

    let post = &author.created_entries[0];
    assert_eq!(post.approver.name, "Alice");
    assert!(post.approver.created_entries.is_empty());
    assert_eq!(cache.count("author"), 1);
    assert_eq!(cache.count("post"), 1);
}

#[test]
fn test_three_node_cycle() {
    // p1.related = [col], col.featured = a1, a1.createdEntries = [p1]
    let page = page(
        vec![entry("p1", "post", json!({ "title": "Start", "related": [link("col")] }))],
        vec![
            entry("col", "collection", json!({ "title": "Picks", "featured": link("a1") })),
            entry("a1", "author", json!({ "name": "Alice", "createdEntries": [link("p1")] })),
        ],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    let post = &posts[0];

    let collection = post.related[0].as_collection().unwrap();
    assert_eq!(collection.title, "Picks");
    let author = collection.featured.as_ref().unwrap().as_author().unwrap();
    assert_eq!(author.name, "Alice");

    let closing = &author.created_entries[0];
    assert_eq!(closing.title, "Start");
    assert!(closing.related.is_empty());
}

#[test]
fn test_self_referencing_collection_cycle() {
    let page = page(
        vec![entry("a", "collection", json!({ "title": "a", "children": [link("b")] }))],
        vec![entry("b", "collection", json!({ "title": "b", "children": [link("a")] }))],
    );

    let mut cache = ResolutionCache::new();
    let collections = resolve_page::<Collection>(&page, &mut cache);
    let a = &collections[0];
    let b = &a.children[0];
    assert_eq!(b.title, "b");
    let a_seen_by_b = &b.children[0];
    assert_eq!(a_seen_by_b.title, "a");
    assert!(a_seen_by_b.children.is_empty());
}

// ============================================================================
// Polymorphic Links
// ============================================================================

#[test]
fn test_byline_resolves_author_variant() {
    let page = page(
        vec![entry("p1", "post", json!({ "title": "Signed", "byline": link("a1") }))],
        vec![entry("a1", "author", json!({ "name": "Alice" }))],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    match posts[0].byline.as_ref() {
        Some(Entry::Author(author)) => assert_eq!(author.name, "Alice"),
        other => panic!("expected author byline, got {:?}", other),
    }
    assert_eq!(posts[0].byline.as_ref().unwrap().content_type(), "author");
}

#[test]
fn test_unknown_content_type_is_none() {
    let page = page(
        vec![entry(
            "p1",
            "post",
            json!({ "title": "Odd", "byline": link("w1"), "related": [link("w1"), link("p2")] }),
        )],
        vec![
            entry("w1", "widget", json!({ "size": 3 })),
            entry("p2", "post", json!({ "title": "Other" })),
        ],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    assert!(posts[0].byline.is_none());
    assert_eq!(posts[0].related.len(), 1);
    assert_eq!(posts[0].related[0].id().as_str(), "p2");
}

#[test]
fn test_related_follows_visible_order() {
    let page = page(
        vec![entry(
            "p1",
            "post",
            json!({ "title": "Mixed", "related": [link("p2"), link("c1"), link("a1")] }),
        )],
        vec![
            entry("a1", "author", json!({ "name": "Alice" })),
            entry("c1", "category", json!({ "title": "news" })),
            entry("p2", "post", json!({ "title": "Other" })),
        ],
    );

    let mut cache = ResolutionCache::new();
    let posts = resolve_page::<Post>(&page, &mut cache);
    let kinds: Vec<&str> = posts[0].related.iter().map(Entry::content_type).collect();
    assert_eq!(kinds, vec!["author", "category", "post"]);
}

// ============================================================================
// Cache Identity
// ============================================================================

#[test]
fn test_repeated_resolution_is_identical() {
    let page = page(
        vec![
            entry("c1", "category", json!({ "title": "one", "parent": link("c0") })),
            entry("c2", "category", json!({ "title": "two", "parent": link("c0") })),
        ],
        vec![entry("c0", "category", json!({ "title": "root" }))],
    );
    let store = EntryStore::from_page(&page);
    let mut cache = ResolutionCache::new();
    let mut resolver = Resolver::new(&store, &mut cache);

    let one = resolver.resolve_one::<Category>(&id("c1"));
    let two = resolver.resolve_one::<Category>(&id("c2"));
    assert!(Arc::ptr_eq(
        one.parent.as_ref().unwrap(),
        two.parent.as_ref().unwrap()
    ));
    assert!(Arc::ptr_eq(&one, &resolver.resolve_one::<Category>(&id("c1"))));
}
