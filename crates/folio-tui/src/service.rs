//! Service integration layer for folio-core.
//!
//! Builds the form relay used for contact submissions from configuration.

use std::sync::Arc;

use folio_core::api::models::ContactPayload;
use folio_core::core::services::config_service::ConfigService;
use folio_core::core::services::traits::Relay;
use folio_core::storage::config::Config;

/// Shared relay handle, cloned into background tasks.
pub type SharedRelay = Arc<dyn Relay>;

/// Relay availability for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayStatus {
    /// Endpoint configured and client built
    Ready(String),
    /// Client could not be built; submissions are refused
    Unavailable(String),
}

/// Initialize the relay client from configuration, wrapped in Arc.
pub fn init_relay(config: &Config) -> (Option<SharedRelay>, RelayStatus) {
    let service = ConfigService::new(config.clone());
    match service.relay_client() {
        Ok(client) => {
            let endpoint = client.endpoint.clone();
            log::debug!("relay ready at {}", endpoint);
            let relay: SharedRelay = Arc::new(client);
            (Some(relay), RelayStatus::Ready(endpoint))
        }
        Err(e) => {
            log::warn!("relay unavailable: {}", e);
            (None, RelayStatus::Unavailable(e.display_friendly()))
        }
    }
}

/// Deliver a payload, flattening the error to a message for the action channel.
pub async fn deliver(relay: SharedRelay, payload: ContactPayload) -> Result<(), String> {
    relay.deliver(&payload).await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_relay_with_valid_endpoint() {
        let mut config = Config::default();
        config.relay.endpoint = Some("https://relay.example.test/f/abc".to_string());
        let (relay, status) = init_relay(&config);
        assert!(relay.is_some());
        assert!(matches!(status, RelayStatus::Ready(_)));
    }

    #[test]
    fn test_init_relay_with_invalid_endpoint() {
        let mut config = Config::default();
        config.relay.endpoint = Some("not a url".to_string());
        // The environment override would mask the configured value.
        if std::env::var(folio_core::storage::config::RELAY_URL_ENV).is_ok() {
            return;
        }
        let (relay, status) = init_relay(&config);
        assert!(relay.is_none());
        assert!(matches!(status, RelayStatus::Unavailable(_)));
    }
}
