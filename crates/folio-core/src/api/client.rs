use crate::api::models::ContactPayload;
use crate::error::{ApiError, AppError};
use crate::utils::error_helpers::*;
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/your-form-id";
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the third-party form relay.
///
/// A submission is a single POST; there is no retry.
#[derive(Debug, Clone)]
pub struct RelayClient {
    client: Client,
    pub endpoint: String,
    timeout_secs: u64,
}

impl RelayClient {
    pub fn new(endpoint: String) -> Result<Self, ApiError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(endpoint: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| convert_request_error(e, "client_init", timeout_secs))?;

        Ok(RelayClient {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout_secs,
        })
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn build_request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Post the payload as JSON. Any 2xx response counts as delivered.
    pub async fn submit(&self, payload: &ContactPayload) -> Result<(), AppError> {
        let endpoint = self.endpoint.as_str();

        let response = self
            .build_request(Method::POST)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::Api(convert_request_error(e, endpoint, self.timeout_secs)))?;

        let status = response.status();

        if status.is_success() {
            log::info!("relay accepted submission ({})", status.as_u16());
            Ok(())
        } else {
            log::debug!(
                "relay response body: {}",
                response
                    .text()
                    .await
                    .unwrap_or_else(|_| "<unreadable>".to_string())
            );
            Err(AppError::Api(ApiError::Rejected {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            to: "owner@example.com".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = RelayClient::new("https://relay.example.test/f/abc".to_string());
        assert!(client.is_ok());
    }

    #[test]
    fn test_endpoint_trailing_slash_removed() {
        let client = RelayClient::new("https://relay.example.test/f/abc/".to_string())
            .expect("client creation failed");
        assert_eq!(client.endpoint, "https://relay.example.test/f/abc");
    }

    #[test]
    fn test_build_request() {
        let client = RelayClient::new("https://relay.example.test/f/abc".to_string())
            .expect("client creation failed");
        let built_request = client
            .build_request(Method::POST)
            .build()
            .expect("Failed to build request");

        assert_eq!(
            built_request.url().as_str(),
            "https://relay.example.test/f/abc"
        );
        assert_eq!(built_request.method(), Method::POST);
        assert_eq!(
            built_request
                .headers()
                .get("accept")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_submit_posts_json_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/f/abc"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hi",
                "message": "Hello",
                "to": "owner@example.com"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = RelayClient::new(format!("{}/f/abc", server.uri()))
            .expect("client creation failed");
        let result = client.submit(&payload()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_submit_non_success_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid"))
            .mount(&server)
            .await;

        let client = RelayClient::new(format!("{}/f/abc", server.uri()))
            .expect("client creation failed");
        let result = client.submit(&payload()).await;

        match result {
            Err(AppError::Api(ApiError::Rejected { status, .. })) => assert_eq!(status, 422),
            other => panic!("Expected Rejected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = RelayClient::with_timeout(format!("{}/f/abc", server.uri()), 1)
            .expect("client creation failed");
        let result = client.submit(&payload()).await;

        assert!(matches!(
            result,
            Err(AppError::Api(ApiError::Timeout { timeout_secs: 1, .. }))
        ));
    }

    #[tokio::test]
    async fn test_submit_connection_failure() {
        let client = RelayClient::new("http://127.0.0.1:1/f/abc".to_string())
            .expect("client creation failed");
        let result = client.submit(&payload()).await;
        assert!(matches!(result, Err(AppError::Api(ApiError::Http { .. }))));
    }
}
