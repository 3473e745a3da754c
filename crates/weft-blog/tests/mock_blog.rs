//! Listing blog posts through the HTTP client against a mock CDN.

use serde_json::json;
use weft_blog::{Entry, Post};
use weft_core::{ApiUrl, ListOptions};
use weft_http::{ClientConfig, ContentClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mock_client(server: &MockServer) -> ContentClient {
    let base = ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    ContentClient::new(ClientConfig::new("blog", "token").with_base_url(base)).unwrap()
}

fn sys(id: &str, content_type: &str) -> serde_json::Value {
    json!({
        "id": id,
        "type": "Entry",
        "contentType": { "sys": { "type": "Link", "linkType": "ContentType", "id": content_type } }
    })
}

fn link(id: &str) -> serde_json::Value {
    json!({ "sys": { "type": "Link", "linkType": "Entry", "id": id } })
}

#[tokio::test]
async fn test_posts_listing_resolves_includes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/blog/environments/master/entries"))
        .and(query_param("content_type", "post"))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": { "type": "Array" },
            "total": 2, "skip": 0, "limit": 100,
            "items": [
                { "sys": sys("p1", "post"),
                  "fields": { "title": "First", "author": [link("a1")], "byline": link("a1") } },
                { "sys": sys("p2", "post"),
                  "fields": { "title": "Second", "byline": link("p1"), "category": [link("c1")] } }
            ],
            "includes": {
                "Entry": [
                    { "sys": sys("a1", "author"),
                      "fields": { "name": "Alice", "createdEntries": [link("p1")] } },
                    { "sys": sys("c1", "category"), "fields": { "title": "news" } }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/spaces/blog/environments/master/entries"))
        .and(query_param("skip", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": { "type": "Array" }, "total": 2, "skip": 100, "limit": 100, "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let mut posts = client.list::<Post>(ListOptions::default());
    let mut seen: Vec<std::sync::Arc<Post>> = Vec::new();
    while let Some(post) = posts.next().await.unwrap() {
        seen.push(post);
    }

    // Reverse page order.
    let titles: Vec<&str> = seen.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);

    let second = &seen[0];
    assert_eq!(second.category[0].title, "news");
    let byline = second.byline.as_ref().and_then(Entry::as_post).unwrap();
    assert_eq!(byline.title, "First");
    assert_eq!(byline.author[0].name, "Alice");

    let first = &seen[1];
    assert!(matches!(first.byline, Some(Entry::Author(_))));
}
