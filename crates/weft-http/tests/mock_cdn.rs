//! Mock CDN tests for the weft HTTP client.
//!
//! These tests use wiremock to simulate the content delivery API and check
//! request shape, error mapping and page resolution without network access.

use std::sync::Arc;

use futures_util::StreamExt;
use serde::Deserialize;
use serde_json::json;
use weft_core::error::{Error, TransportError};
use weft_core::{ApiUrl, EntryId, Link, ListOptions, Model, PageQuery, RawAsset, Resolver};
use weft_http::{ClientConfig, ContentClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENTRIES: &str = "/spaces/cfexampleapi/environments/master/entries";

/// A category with a self-recursive parent link.
#[derive(Debug, Clone, Default)]
struct Category {
    title: String,
    parent: Option<Arc<Category>>,
}

#[derive(Deserialize)]
struct CategoryFields {
    #[serde(default)]
    title: String,
    parent: Option<Link>,
}

impl Model for Category {
    const CONTENT_TYPE: &'static str = "category";
    type Fields = CategoryFields;

    fn materialize(_: &EntryId, fields: &CategoryFields, _: &[RawAsset]) -> Self {
        Self {
            title: fields.title.clone(),
            parent: None,
        }
    }

    fn link(id: &EntryId, fields: &CategoryFields, resolver: &mut Resolver<'_>) {
        let parent = resolver.resolve_ref::<Category>(fields.parent.as_ref());
        resolver.update::<Category>(id, |c| c.parent = parent);
    }
}

/// Helper to create a client pointed at a mock server.
fn mock_client(server: &MockServer) -> ContentClient {
    // For tests, we need to allow HTTP localhost
    let base = ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    let config = ClientConfig::new("cfexampleapi", "test-token").with_base_url(base);
    ContentClient::new(config).unwrap()
}

fn category(id: &str, title: &str, parent: Option<&str>) -> serde_json::Value {
    let mut fields = json!({ "title": title });
    if let Some(parent) = parent {
        fields["parent"] = json!({ "sys": { "type": "Link", "linkType": "Entry", "id": parent } });
    }
    json!({
        "sys": { "id": id, "type": "Entry", "contentType": { "sys": { "type": "Link", "linkType": "ContentType", "id": "category" } } },
        "fields": fields
    })
}

fn page(items: Vec<serde_json::Value>, includes: Vec<serde_json::Value>) -> serde_json::Value {
    json!({
        "sys": { "type": "Array" },
        "total": items.len(),
        "skip": 0,
        "limit": 100,
        "items": items,
        "includes": { "Entry": includes }
    })
}

// ============================================================================
// Request Shape
// ============================================================================

#[tokio::test]
async fn test_entries_request_carries_query_and_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .and(header("authorization", "Bearer test-token"))
        .and(query_param("content_type", "category"))
        .and(query_param("skip", "20"))
        .and(query_param("limit", "10"))
        .and(query_param("include", "2"))
        .and(query_param("locale", "de-DE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let query = PageQuery {
        content_type: "category".to_string(),
        skip: 20,
        limit: 10,
        include: 2,
        locale: Some("de-DE".to_string()),
    };
    let page = client.fetch_raw_page(&query).await.unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_locale_falls_back_to_configured_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .and(query_param("locale", "en-GB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let base = ApiUrl::new(format!("http://127.0.0.1:{}", server.address().port())).unwrap();
    let config = ClientConfig::new("cfexampleapi", "test-token")
        .with_base_url(base)
        .with_locale("en-GB");
    let client = ContentClient::new(config).unwrap();

    let query = PageQuery {
        content_type: "category".to_string(),
        skip: 0,
        limit: 100,
        include: 1,
        locale: None,
    };
    client.fetch_raw_page(&query).await.unwrap();
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_error_body_maps_to_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "sys": { "type": "Error", "id": "NotFound" },
            "message": "The resource could not be found.",
            "requestId": "req-42"
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client
        .list::<Category>(ListOptions::default())
        .next()
        .await
        .unwrap_err();

    match err {
        Error::Protocol(protocol) => {
            assert_eq!(protocol.status, 404);
            assert_eq!(protocol.error.as_deref(), Some("NotFound"));
            assert_eq!(protocol.request_id.as_deref(), Some("req-42"));
            assert!(protocol.is_not_found());
        }
        other => panic!("expected protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_token_is_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "sys": { "type": "Error", "id": "AccessTokenInvalid" },
            "message": "The access token you sent could not be found or is invalid."
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.fetch_schema().await.unwrap_err();
    assert!(matches!(err, Error::Protocol(ref p) if p.is_auth_error()));
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_unparseable_error_body_keeps_status_and_header_request_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(503)
                .insert_header("x-contentful-request-id", "hdr-7")
                .set_body_string("upstream unavailable"),
        )
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.fetch_locales().await.unwrap_err();
    match err {
        Error::Protocol(protocol) => {
            assert_eq!(protocol.status, 503);
            assert!(protocol.error.is_none());
            assert_eq!(protocol.request_id.as_deref(), Some("hdr-7"));
        }
        other => panic!("expected protocol error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_page_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let err = client.fetch_all::<Category>().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let server = MockServer::start().await;
    let client = mock_client(&server);
    drop(server);

    let err = client.fetch_schema().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Transport(TransportError::Connection { .. } | TransportError::Http { .. })
    ));
}

// ============================================================================
// Schema and Locales
// ============================================================================

#[tokio::test]
async fn test_fetch_schema() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/cfexampleapi/environments/master/content_types"))
        .and(query_param("limit", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": { "type": "Array" },
            "total": 1, "skip": 0, "limit": 1000,
            "items": [{
                "sys": { "id": "category", "type": "ContentType" },
                "name": "Category",
                "displayField": "title",
                "fields": [
                    { "id": "title", "name": "Title", "type": "Symbol", "required": true },
                    { "id": "parent", "name": "Parent", "type": "Link", "linkType": "Entry",
                      "validations": [{ "linkContentType": ["category"] }] }
                ]
            }]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let schema = client.fetch_schema().await.unwrap();
    assert_eq!(schema.len(), 1);

    let ct = schema.iter().next().unwrap();
    let shapes: Vec<String> = schema
        .classify_content_type(ct)
        .iter()
        .map(|f| f.shape.to_string())
        .collect();
    assert_eq!(shapes, vec!["Text", "entry -> self"]);
}

#[tokio::test]
async fn test_fetch_locales_and_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/spaces/cfexampleapi/environments/master/locales"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sys": { "type": "Array" },
            "total": 2, "skip": 0, "limit": 1000,
            "items": [
                { "code": "de-DE", "name": "German", "default": false, "fallbackCode": "en-US" },
                { "code": "en-US", "name": "English", "default": true, "fallbackCode": null }
            ]
        })))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let locales = client.fetch_locales().await.unwrap();
    assert_eq!(locales.len(), 2);

    let default = client.default_locale().await.unwrap().unwrap();
    assert_eq!(default.code, "en-US");
}

// ============================================================================
// Resolution Through the Client
// ============================================================================

#[tokio::test]
async fn test_list_resolves_links_and_paginates() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .and(query_param("skip", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![category("child", "child", Some("root"))],
            vec![category("root", "root", None)],
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .and(query_param("skip", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![category("other", "other", None)],
            vec![],
        )))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .and(query_param("skip", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let options = ListOptions {
        limit: 1,
        ..Default::default()
    };
    let mut iter = client.list::<Category>(options);

    let child = iter.next().await.unwrap().unwrap();
    assert_eq!(child.title, "child");
    let parent = child.parent.as_ref().unwrap();
    assert_eq!(parent.title, "root");
    assert!(parent.parent.is_none());

    let other = iter.next().await.unwrap().unwrap();
    assert_eq!(other.title, "other");

    assert!(iter.next().await.unwrap().is_none());
    // Exhausted: no further requests (checked by `expect(1)` on drop).
    assert!(iter.next().await.unwrap().is_none());
}

#[tokio::test]
async fn test_fetch_all_keeps_api_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENTRIES))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            vec![
                category("a", "a", None),
                category("b", "b", Some("a")),
                category("c", "c", Some("b")),
            ],
            vec![],
        )))
        .mount(&server)
        .await;

    let client = mock_client(&server);
    let all = client.fetch_all::<Category>().await.unwrap();
    let titles: Vec<&str> = all.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
    assert_eq!(all[2].parent.as_ref().unwrap().parent.as_ref().unwrap().title, "a");

    let streamed: Vec<_> = client
        .list::<Category>(ListOptions::default())
        .into_stream()
        .take(3)
        .map(|r| r.unwrap().title.clone())
        .collect()
        .await;
    assert_eq!(streamed, vec!["c", "b", "a"]);
}
