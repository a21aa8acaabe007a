//! Shared fixtures for router tests

#![allow(dead_code)]

use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use mahasiswa_server::{build_router, create_pool_with_options, ServerConfig};
use sqlx::AnyPool;
use tower::ServiceExt;

pub const SCHEMA: &str = r#"
    CREATE TABLE mahasiswa (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_lengkap TEXT NOT NULL,
        nim TEXT NOT NULL,
        no_telp TEXT NOT NULL,
        alamat TEXT NOT NULL,
        jurusan TEXT NOT NULL
    )
"#;

pub const ADA_FORM: &str = "full_name=Ada+Lovelace&student_number=S001&phone_number=555-0100\
    &address=1+Analytic+Engine+Rd&major=Computer+Science";

/// In-memory SQLite behind a single pooled connection, so every lease
/// sees the same database.
pub async fn empty_pool() -> AnyPool {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    create_pool_with_options("sqlite::memory:", 1, Duration::from_secs(5))
        .await
        .expect("pool creation failed")
}

pub async fn pool_with_schema(schema: &str) -> AnyPool {
    let pool = empty_pool().await;
    sqlx::query(schema)
        .execute(&pool)
        .await
        .expect("schema creation failed");
    pool
}

pub async fn app() -> Router {
    app_with(pool_with_schema(SCHEMA).await)
}

pub fn app_with(pool: AnyPool) -> Router {
    build_router(pool, &ServerConfig::default())
}

pub fn app_with_timeout(pool: AnyPool, request_timeout: Duration) -> Router {
    let config = ServerConfig {
        request_timeout,
        ..ServerConfig::default()
    };
    build_router(pool, &config)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub const BOUNDARY: &str = "mahasiswa-boundary";

/// `multipart/form-data` request with one text part per field.
pub fn multipart(method: &str, uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
            BOUNDARY, name, value
        ));
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));

    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}
