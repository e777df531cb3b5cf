use std::sync::Arc;

use klimatpro_api::app::{self, services::AppServices};
use klimatpro_core::InquiryId;
use reqwest::{Method, StatusCode};
use serde_json::json;

struct TestServer {
    base_url: String,
    services: Arc<AppServices>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let services = Arc::new(AppServices::with_partner_feed().unwrap());
        let app = app::build_app(services.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            services,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn ids(body: &serde_json::Value) -> Vec<String> {
    body["products"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn lists_every_partner_product_with_sources() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/products", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()["access-control-allow-origin"].to_str().unwrap(),
        "*"
    );

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["total"], 9);
    assert_eq!(body["sources"], json!(["klimatprof.online", "breez.ru"]));
    assert_eq!(ids(&body).first().map(String::as_str), Some("kp_1"));

    let first = &body["products"][0];
    assert_eq!(first["type"], "Настенный");
    assert_eq!(first["price"], 49900);
    assert_eq!(first["source"], "klimatprof.online");
}

#[tokio::test]
async fn query_parameters_narrow_the_list() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: serde_json::Value = client
        .get(format!("{}/products", srv.base_url))
        .query(&[("min_price", "40000"), ("max_price", "50000")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec!["kp_1", "br_1", "br_3"]);
    assert_eq!(body["total"], 3);

    let body: serde_json::Value = client
        .get(format!("{}/products", srv.base_url))
        .query(&[("brand", "royal clima")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(ids(&body), vec!["br_2"]);

    let body: serde_json::Value = client
        .get(format!("{}/products", srv.base_url))
        .query(&[("type", "канальный")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn unparseable_price_is_ignored() {
    let srv = TestServer::spawn().await;
    let body: serde_json::Value = reqwest::Client::new()
        .get(format!("{}/products", srv.base_url))
        .query(&[("min_price", "abc")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["total"], 9);
}

#[tokio::test]
async fn options_answers_preflight() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .request(Method::OPTIONS, format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let headers = res.headers().clone();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-methods"], "GET, OPTIONS");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["access-control-max-age"], "86400");
    assert!(res.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn other_methods_are_rejected_with_json() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .delete(format!("{}/products", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn inquiry_is_accepted_and_recorded() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(format!("{}/inquiries", srv.base_url))
        .json(&json!({"name": "Ann", "phone": "+7000", "message": "hi"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await.unwrap();
    let id: InquiryId = body["id"].as_str().unwrap().parse().unwrap();

    let recorded = srv.services.inquiries();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].id, id);
    assert_eq!(recorded[0].name, "Ann");
    assert_eq!(recorded[0].phone, "+7000");
    assert_eq!(recorded[0].message, "hi");
}

#[tokio::test]
async fn inquiry_with_missing_field_is_a_validation_error() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(format!("{}/inquiries", srv.base_url))
        .json(&json!({"name": "Ann", "message": "hi"}))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert!(body["message"].as_str().unwrap().contains("phone"));
    assert!(srv.services.inquiries().is_empty());
}

#[tokio::test]
async fn malformed_inquiry_body_is_rejected() {
    let srv = TestServer::spawn().await;
    let res = reqwest::Client::new()
        .post(format!("{}/inquiries", srv.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_body");
}
