use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A mock GitLab OAuth2 server built on `wiremock`. Simulates the
/// `/oauth/token` and `/oauth/revoke` endpoints with configurable behavior.
pub struct MockGitLabServer {
    server: MockServer,
}

impl MockGitLabServer {
    /// Start a new mock server on a random available port.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL of the mock server (e.g. "http://127.0.0.1:PORT").
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a handler that returns a successful token response (HTTP 200)
    /// with the given JSON body at `POST /oauth/token`, and assert the
    /// expected number of calls when the server drops.
    pub async fn mock_token_success(&self, response: serde_json::Value, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response))
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns an OAuth2 error response (HTTP 400)
    /// with standard error JSON at `POST /oauth/token`.
    pub async fn mock_token_error(&self, error_code: &str, description: &str) {
        let body = serde_json::json!({
            "error": error_code,
            "error_description": description,
        });
        Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&body))
            .mount(&self.server)
            .await;
    }

    /// Mount a handler that returns HTTP 200 with an empty body at
    /// `POST /oauth/revoke`.
    pub async fn mock_revoke_success(&self) {
        Mock::given(method("POST"))
            .and(path("/oauth/revoke"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&self.server)
            .await;
    }
}
