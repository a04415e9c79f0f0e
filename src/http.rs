//! HTTP client utilities
//!
//! Provides the reqwest::Client shared by the search client. System proxy
//! env vars (HTTP_PROXY, HTTPS_PROXY, NO_PROXY) are honored by reqwest itself.

use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Build a reqwest Client with a bounded total request timeout
///
/// `direct` disables proxying entirely, used when the API base is a loopback
/// address.
pub fn client_with_timeout(timeout: Duration, direct: bool) -> Result<Client, FetchError> {
    let mut builder = Client::builder();
    if direct {
        builder = builder.no_proxy();
    }
    builder
        .timeout(timeout)
        .connect_timeout(timeout.min(Duration::from_secs(10)))
        .user_agent(concat!("unsplash-search/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| FetchError::Transport(format!("failed to create HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds() {
        assert!(client_with_timeout(Duration::from_secs(5), false).is_ok());
        assert!(client_with_timeout(Duration::from_secs(5), true).is_ok());
    }
}
