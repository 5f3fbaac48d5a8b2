// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 메모리 저장소 위에서 전체 Router 를 구성하고
//       oneshot 으로 요청을 보내는 함수 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = TestApp::new();
//     let (status, body) = app.post_json("/api/users", json!({...}), None).await;
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::collections::HashMap;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chirpy::routes::create_app;
use chirpy::shared::config::Config;
use chirpy::shared::database::MemoryDatabase;
use chirpy::shared::services::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

// 테스트용 상수
pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const TEST_PASSWORD: &str = "04234";

/// 테스트용 설정 (환경 변수 대신 key-value 맵 사용)
pub fn test_config(overrides: &[(&str, &str)]) -> Config {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("STORAGE".to_string(), "memory".to_string()),
        ("JWT_SECRET".to_string(), TEST_JWT_SECRET.to_string()),
        ("PLATFORM".to_string(), "dev".to_string()),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    Config::from_lookup(|key| vars.get(key).cloned()).expect("valid test config")
}

pub struct TestApp {
    pub router: Router,
    pub db: MemoryDatabase,
}

/// 로그인 결과 (테스트 편의용)
pub struct Session {
    pub user_id: String,
    pub token: String,
    pub refresh_token: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config(&[]))
    }

    pub fn with_config(config: Config) -> Self {
        let db = MemoryDatabase::new();
        let router = create_app(AppState::from_memory(config, db.clone()));
        Self { router, db }
    }

    /// 요청 전송 후 (상태 코드, 본문 문자열) 반환
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> (StatusCode, String) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// JSON 본문으로 파싱하는 버전 (빈 본문은 Null)
    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        authorization: Option<&str>,
    ) -> (StatusCode, Value) {
        let (status, text) = self.send(method, uri, body, authorization).await;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap()
        };
        (status, value)
    }

    pub async fn register(&self, email: &str) -> Value {
        let (status, body) = self
            .send_json(
                Method::POST,
                "/api/users",
                Some(json!({ "email": email, "password": TEST_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
        body
    }

    pub async fn login(&self, email: &str) -> Session {
        let (status, body) = self
            .send_json(
                Method::POST,
                "/api/login",
                Some(json!({ "email": email, "password": TEST_PASSWORD })),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login failed: {body}");

        Session {
            user_id: body["id"].as_str().unwrap().to_string(),
            token: body["token"].as_str().unwrap().to_string(),
            refresh_token: body["refresh_token"].as_str().unwrap().to_string(),
        }
    }

    /// 회원가입 + 로그인
    pub async fn register_and_login(&self, email: &str) -> Session {
        self.register(email).await;
        self.login(email).await
    }

    pub async fn post_chirp(&self, token: &str, body: &str) -> (StatusCode, Value) {
        self.send_json(
            Method::POST,
            "/api/chirps",
            Some(json!({ "body": body })),
            Some(&bearer(token)),
        )
        .await
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
