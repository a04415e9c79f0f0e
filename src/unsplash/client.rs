//! Unsplash search API client

use crate::config::{clamp_page_size, Config};
use crate::error::FetchError;
use crate::session::SearchQuery;
use crate::unsplash::SearchPage;
use reqwest::header::HeaderMap;
use std::future::Future;
use tracing::{debug, info};

/// Anything that can run one photo search
pub trait PhotoSearch: Send + Sync + 'static {
    fn search(
        &self,
        query: &SearchQuery,
        page_size: u32,
    ) -> impl Future<Output = Result<SearchPage, FetchError>> + Send;
}

/// HTTP client for `GET /search/photos`
pub struct UnsplashClient {
    client: reqwest::Client,
    config: Config,
}

impl UnsplashClient {
    pub fn new(config: Config) -> Result<Self, FetchError> {
        let client = crate::http::client_with_timeout(config.timeout, config.is_loopback())?;
        Ok(Self { client, config })
    }

    /// Build the request URL for a query
    pub fn request_url(&self, query: &SearchQuery, page_size: u32) -> url::Url {
        let mut url = self.config.search_endpoint();
        url.query_pairs_mut()
            .append_pair("query", query.as_str())
            .append_pair("client_id", self.config.access_key())
            .append_pair("per_page", &clamp_page_size(page_size).to_string());
        url
    }
}

impl PhotoSearch for UnsplashClient {
    async fn search(&self, query: &SearchQuery, page_size: u32) -> Result<SearchPage, FetchError> {
        let url = self.request_url(query, page_size);
        debug!("Searching photos for '{}' (per_page={})", query, clamp_page_size(page_size));

        let response = self.client.get(url).send().await?;
        log_rate_limit(response.headers());

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let page = SearchPage::from_body(&body)?;

        info!(
            "Search for '{}' returned {} results (total: {})",
            query,
            page.results.len(),
            page.total.map(|t| t.to_string()).unwrap_or_else(|| "?".to_string())
        );
        Ok(page)
    }
}

fn log_rate_limit(headers: &HeaderMap) {
    let read = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    if let (Some(limit), Some(remaining)) = (read("x-ratelimit-limit"), read("x-ratelimit-remaining")) {
        debug!("Rate limit: {}/{} requests remaining", remaining, limit);
    }
}
