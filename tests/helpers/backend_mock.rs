//! Mock events backend for testing
//!
//! This module provides a mock HTTP server that simulates the events REST API
//! and the identity provider. It uses wiremock to create configurable responses.

use serde_json::Value;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
    pub base_url: String,
}

impl BackendMockServer {
    /// Create a new mock backend server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();

        Self { server, base_url }
    }

    /// Serve `GET /api/events` with the given JSON array
    pub async fn mock_list_events(&self, events: Value) {
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(events))
            .mount(&self.server)
            .await;
    }

    /// Serve `GET /api/events` with the given JSON array, only once
    pub async fn mock_list_events_once(&self, events: Value) {
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(200).set_body_json(events))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Serve `GET /api/events` with a raw body and status
    pub async fn mock_list_events_raw(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer `POST /api/events/{id}/register` for a specific user
    pub async fn mock_register(&self, event_id: &str, user_id: &str, status: u16) {
        Mock::given(method("POST"))
            .and(path(format!("/api/events/{}/register", event_id)))
            .and(body_json(serde_json::json!({ "userId": user_id })))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Answer `POST /api/events`
    pub async fn mock_create_event(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/api/events"))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({})))
            .mount(&self.server)
            .await;
    }

    /// Answer the identity provider's `/me` for a bearer token
    pub async fn mock_identity(&self, token: &str, status: u16, user: Value) {
        Mock::given(method("GET"))
            .and(path("/v1/me"))
            .and(header("authorization", format!("Bearer {}", token).as_str()))
            .respond_with(ResponseTemplate::new(status).set_body_json(user))
            .mount(&self.server)
            .await;
    }

    /// Reset all mocks
    pub async fn reset(&self) {
        self.server.reset().await;
    }

    /// All requests received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Count requests with the given method and exact path
    pub async fn count_requests(&self, http_method: &str, request_path: &str) -> usize {
        self.requests()
            .await
            .iter()
            .filter(|req| req.method.as_str() == http_method && req.url.path() == request_path)
            .count()
    }

    /// Verify that a specific endpoint was called
    pub async fn verify_endpoint_called(&self, http_method: &str, request_path: &str, times: usize) {
        let matching_requests = self.count_requests(http_method, request_path).await;

        assert_eq!(
            matching_requests, times,
            "Expected {} {} calls to {}, but got {}",
            times, http_method, request_path, matching_requests
        );
    }
}
