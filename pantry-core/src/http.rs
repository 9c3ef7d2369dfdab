//! Shared HTTP client
//!
//! One lazily-initialized reqwest client for every upstream call, so
//! connections get pooled instead of rebuilt per request.

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;

/// Ambient timeout for upstream requests in seconds; callers cannot
/// override it per request
const DEFAULT_TIMEOUT_SECS: u64 = 60;

static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
pub fn get_client() -> &'static Client {
    HTTP_CLIENT.get_or_init(|| {
        Client::builder()
            .user_agent(concat!("pantry/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client - this should never fail")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_client_returns_same_instance() {
        let client1 = get_client();
        let client2 = get_client();
        assert!(std::ptr::eq(client1, client2));
    }
}
