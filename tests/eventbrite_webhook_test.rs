// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Eventbrite Webhook 集成测试
///
/// 通过内存仓库和 wiremock 模拟的 Eventbrite API 驱动完整的
/// HTTP 入口，覆盖签名、解析、跳过、补充查询降级和幂等重投。
use async_trait::async_trait;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum_test::TestServer;
use hmac::{Hmac, Mac};
use serde_json::{json, Value};
use sha2::Sha256;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ticketrs::config::settings::{
    DatabaseSettings, EventbriteSettings, ServerSettings, Settings, StorageSettings,
};
use ticketrs::domain::models::crawl::Crawl;
use ticketrs::domain::models::order::Order;
use ticketrs::domain::repositories::crawl_repository::CrawlRepository;
use ticketrs::domain::repositories::order_repository::{OrderRepository, RepositoryError};
use ticketrs::domain::repositories::storage_repository::StorageRepository;
use ticketrs::infrastructure::eventbrite::EventbriteClient;
use ticketrs::infrastructure::storage::InMemoryStorage;
use ticketrs::presentation::routes;

const WEBHOOK_PATH: &str = "/api/webhooks/eventbrite";

#[derive(Default)]
struct InMemoryOrderRepo {
    rows: Mutex<Vec<Order>>,
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepo {
    async fn upsert(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .iter_mut()
            .find(|r| order.order_id.is_some() && r.order_id == order.order_id)
        {
            *existing = order.clone();
        } else {
            rows.push(order.clone());
        }
        Ok(())
    }

    async fn insert(&self, order: &Order) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn update_by_order_id(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|r| r.order_id == order.order_id)
            .ok_or(RepositoryError::NotFound)?;
        *existing = order.clone();
        Ok(())
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.order_id.as_deref() == Some(order_id))
            .cloned())
    }
}

#[derive(Default)]
struct InMemoryCrawlRepo {
    rows: Mutex<Vec<Crawl>>,
}

#[async_trait]
impl CrawlRepository for InMemoryCrawlRepo {
    async fn upsert(&self, crawl: &Crawl) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(existing) = rows
            .iter_mut()
            .find(|r| crawl.eventbrite_id.is_some() && r.eventbrite_id == crawl.eventbrite_id)
        {
            *existing = crawl.clone();
        } else {
            rows.push(crawl.clone());
        }
        Ok(())
    }

    async fn insert(&self, crawl: &Crawl) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().push(crawl.clone());
        Ok(())
    }

    async fn update_by_eventbrite_id(&self, crawl: &Crawl) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let existing = rows
            .iter_mut()
            .find(|r| r.eventbrite_id == crawl.eventbrite_id)
            .ok_or(RepositoryError::NotFound)?;
        *existing = crawl.clone();
        Ok(())
    }

    async fn find_by_eventbrite_id(
        &self,
        eventbrite_id: &str,
    ) -> Result<Option<Crawl>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.eventbrite_id.as_deref() == Some(eventbrite_id))
            .cloned())
    }
}

struct TestApp {
    server: TestServer,
    orders: Arc<InMemoryOrderRepo>,
    crawls: Arc<InMemoryCrawlRepo>,
    storage: Arc<InMemoryStorage>,
}

fn test_settings(secret: Option<&str>, api_token: Option<&str>) -> Settings {
    Settings {
        database: DatabaseSettings {
            url: "sqlite::memory:".to_string(),
            max_connections: None,
            min_connections: None,
            connect_timeout: None,
            idle_timeout: None,
        },
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        storage: StorageSettings {
            storage_type: "local".to_string(),
            local_path: None,
            s3_region: None,
            s3_bucket: None,
            s3_access_key: None,
            s3_secret_key: None,
            s3_endpoint: None,
            public_base_url: None,
        },
        eventbrite: EventbriteSettings {
            webhook_secret: secret.map(String::from),
            api_token: api_token.map(String::from),
        },
    }
}

fn spawn_app(secret: Option<&str>, api_token: Option<&str>) -> TestApp {
    let settings = Arc::new(test_settings(secret, api_token));
    let eventbrite = EventbriteClient::new(api_token.map(String::from));
    let orders = Arc::new(InMemoryOrderRepo::default());
    let crawls = Arc::new(InMemoryCrawlRepo::default());
    let storage = Arc::new(InMemoryStorage::new());

    let app = routes::app(
        settings,
        eventbrite,
        orders.clone(),
        crawls.clone(),
        storage.clone(),
    );

    TestApp {
        server: TestServer::new(app).unwrap(),
        orders,
        crawls,
        storage,
    }
}

fn sign(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

#[tokio::test]
async fn health_and_version_endpoints_work() {
    let app = spawn_app(None, None);

    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");

    let response = app.server.get("/v1/version").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn empty_body_returns_400() {
    let app = spawn_app(Some("secret"), None);

    let response = app.server.post(WEBHOOK_PATH).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(app.orders.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_returns_400() {
    let app = spawn_app(None, None);

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from_static(b"not json"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_signature_returns_401() {
    let app = spawn_app(Some("secret"), None);
    let body = serde_json::to_vec(&json!({ "config": { "action": "order.placed" } })).unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(app.orders.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn wrong_signature_returns_401_and_persists_nothing() {
    let app = spawn_app(Some("secret"), None);
    let body = serde_json::to_vec(&json!({ "config": { "action": "order.placed" } })).unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .add_header("x-eventbrite-signature", sign("wrong-secret", &body))
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(app.orders.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn garbled_signature_header_returns_401() {
    let app = spawn_app(Some("secret"), None);
    let body = serde_json::to_vec(&json!({ "config": { "action": "order.placed" } })).unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .add_header("x-eventbrite-signature", "md5=abcdef")
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_signature_is_accepted() {
    let app = spawn_app(Some("secret"), None);
    let body = serde_json::to_vec(&json!({ "config": { "action": "order.placed" } })).unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .add_header("x-eventbrite-signature", sign("secret", &body))
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["ok"], json!(true));
    // No api_url and no token, so the row carries payload data only.
    assert_eq!(app.orders.rows.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_action_is_skipped_without_side_effects() {
    let upstream = MockServer::start().await;
    // Nothing should reach the Eventbrite API for an unhandled action.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstream)
        .await;

    let app = spawn_app(None, Some("token"));
    let body = serde_json::to_vec(&json!({
        "api_url": format!("{}/v3/orders/1/", upstream.uri()),
        "config": { "action": "attendee.updated" }
    }))
    .unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let json = response.json::<Value>();
    assert_eq!(json["ok"], json!(true));
    assert_eq!(json["skipped"], json!("Unhandled action attendee.updated"));
    assert!(app.orders.rows.lock().unwrap().is_empty());
    assert!(app.crawls.rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn order_placed_is_enriched_from_the_api() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/orders/123/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "123",
            "event_id": "42",
            "created": "2025-03-01T12:00:00Z",
            "profile": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com"
            },
            "costs": { "gross": { "value": 12345, "currency": "USD" } }
        })))
        .mount(&upstream)
        .await;

    let app = spawn_app(None, Some("token"));
    let body = serde_json::to_vec(&json!({
        "api_url": format!("{}/v3/orders/123/", upstream.uri()),
        "config": { "action": "order.placed" }
    }))
    .unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let rows = app.orders.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].order_id.as_deref(), Some("123"));
    assert_eq!(rows[0].event_id.as_deref(), Some("42"));
    assert_eq!(rows[0].first_name.as_deref(), Some("Ada"));
    assert_eq!(rows[0].last_name.as_deref(), Some("Lovelace"));
    assert_eq!(rows[0].email.as_deref(), Some("ada@example.com"));
    assert_eq!(rows[0].gross.as_deref(), Some("123.45"));
}

#[tokio::test]
async fn enrichment_failure_still_persists_payload_data() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/orders/555/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let app = spawn_app(None, Some("token"));
    let body = serde_json::to_vec(&json!({
        "api_url": format!("{}/v3/orders/555/", upstream.uri()),
        "config": { "action": "order.updated" }
    }))
    .unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let rows = app.orders.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    // Order id falls back to the last path segment of the api_url.
    assert_eq!(rows[0].order_id.as_deref(), Some("555"));
    assert!(rows[0].gross.is_none());
}

fn event_detail(name: &str) -> Value {
    json!({
        "id": "42",
        "name": { "text": name },
        "description": { "text": "An evening out." },
        "start": {
            "timezone": "America/New_York",
            "local": "2025-03-07T18:00:00",
            "utc": "2025-03-07T23:00:00Z"
        },
        "end": { "utc": "2025-03-08T02:00:00Z" },
        "is_series": false
    })
}

#[tokio::test]
async fn event_published_persists_listing_and_mirrors_image() {
    let upstream = MockServer::start().await;
    let mut detail = event_detail("Bar Crawl! NYC");
    detail["logo"] = json!({
        "url": format!("{}/logo-small.jpg", upstream.uri()),
        "original": { "url": format!("{}/logo.png", upstream.uri()) }
    });
    Mock::given(method("GET"))
        .and(path("/v3/events/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/png")
                .set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]),
        )
        .mount(&upstream)
        .await;

    let app = spawn_app(None, Some("token"));
    let body = serde_json::to_vec(&json!({
        "api_url": format!("{}/v3/events/42/", upstream.uri()),
        "config": { "action": "event.published" }
    }))
    .unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let rows = app.crawls.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].eventbrite_id.as_deref(), Some("42"));
    assert_eq!(rows[0].name.as_deref(), Some("Bar Crawl! NYC"));
    assert_eq!(rows[0].slug.as_deref(), Some("bar-crawl-nyc-03-07-25"));
    assert_eq!(
        rows[0].crawl_image_1.as_deref(),
        Some("memory://events/bar-crawl-nyc-03-07-25.png")
    );
    drop(rows);

    let stored = app
        .storage
        .get("events/bar-crawl-nyc-03-07-25.png")
        .await
        .unwrap();
    assert_eq!(stored, Some(vec![0x89, 0x50, 0x4e, 0x47]));
}

#[tokio::test]
async fn event_published_redelivery_is_idempotent() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/events/42/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(event_detail("Bar Crawl! NYC")))
        .up_to_n_times(1)
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/events/42/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(event_detail("Bar Crawl! NYC (Updated)")),
        )
        .mount(&upstream)
        .await;

    let app = spawn_app(None, Some("token"));
    let body = serde_json::to_vec(&json!({
        "api_url": format!("{}/v3/events/42/", upstream.uri()),
        "config": { "action": "event.published" }
    }))
    .unwrap();

    for _ in 0..2 {
        let response = app
            .server
            .post(WEBHOOK_PATH)
            .bytes(Bytes::from(body.clone()))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let rows = app.crawls.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    // Redelivery keeps one row and the latest upstream values win.
    assert_eq!(rows[0].name.as_deref(), Some("Bar Crawl! NYC (Updated)"));
}

#[tokio::test]
async fn series_event_follows_the_listed_occurrence() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/events/99/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "99",
            "name": { "text": "Recurring Crawl" },
            "is_series": true
        })))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/events/99/events/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "events": [{
                "id": "100",
                "resource_uri": format!("{}/v3/events/100/", upstream.uri())
            }]
        })))
        .mount(&upstream)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/events/100/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "100",
            "name": { "text": "Recurring Crawl March" },
            "start": { "local": "2025-03-07T18:00:00" }
        })))
        .mount(&upstream)
        .await;

    let app = spawn_app(None, Some("token"));
    let body = serde_json::to_vec(&json!({
        "api_url": format!("{}/v3/events/99/", upstream.uri()),
        "config": { "action": "event.published" }
    }))
    .unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let rows = app.crawls.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    // The first occurrence of the series is stored, not the series shell.
    assert_eq!(rows[0].eventbrite_id.as_deref(), Some("100"));
    assert_eq!(rows[0].name.as_deref(), Some("Recurring Crawl March"));
    assert_eq!(rows[0].slug.as_deref(), Some("recurring-crawl-march-03-07-25"));
}

#[tokio::test]
async fn event_without_api_token_persists_payload_fallback() {
    let app = spawn_app(None, None);
    let body = serde_json::to_vec(&json!({
        "api_url": "https://www.eventbriteapi.com/v3/events/77/",
        "config": {
            "action": "event.published",
            "event_name": "Fallback Fest"
        }
    }))
    .unwrap();

    let response = app
        .server
        .post(WEBHOOK_PATH)
        .bytes(Bytes::from(body))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let rows = app.crawls.rows.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].eventbrite_id.as_deref(), Some("77"));
    assert_eq!(rows[0].name.as_deref(), Some("Fallback Fest"));
    assert!(rows[0].crawl_image_1.is_none());
}
