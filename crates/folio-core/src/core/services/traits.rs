use async_trait::async_trait;

use crate::api::client::RelayClient;
use crate::api::models::ContactPayload;

/// Delivers contact submissions.
///
/// Implemented by the HTTP relay client; renderers hold it behind an `Arc`
/// and call it from a background task.
#[async_trait]
pub trait Relay: Send + Sync {
    async fn deliver(&self, payload: &ContactPayload) -> crate::Result<()>;
}

#[async_trait]
impl Relay for RelayClient {
    async fn deliver(&self, payload: &ContactPayload) -> crate::Result<()> {
        self.submit(payload).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_relay_client_as_shared_relay() {
        let client = RelayClient::with_timeout("http://127.0.0.1:1/f/none".to_string(), 2)
            .expect("client");
        let relay: Arc<dyn Relay> = Arc::new(client);
        let payload = ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
            to: "owner@example.com".to_string(),
        };

        let result = tokio_test::block_on(relay.deliver(&payload));
        assert!(matches!(result, Err(crate::AppError::Api(_))));
    }
}
