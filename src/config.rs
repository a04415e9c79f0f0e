//! Startup configuration
//!
//! The access key is validated once here; a `SearchSession` can only be built
//! from a `Config`, so a missing key never reaches the request path.

use crate::error::ConfigError;
use std::time::Duration;
use url::{Host, Url};

pub const DEFAULT_API_BASE: &str = "https://api.unsplash.com";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Upstream cap on `per_page` for the search endpoint
pub const MAX_PAGE_SIZE: u32 = 30;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Validated configuration for the photo search client
#[derive(Debug, Clone)]
pub struct Config {
    access_key: String,
    api_base: Url,
    pub page_size: u32,
    pub timeout: Duration,
}

impl Config {
    /// Build a config from the raw access key and API base
    pub fn new(access_key: Option<&str>, api_base: Option<&str>) -> Result<Self, ConfigError> {
        let access_key = access_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?
            .to_string();

        let raw_base = api_base.unwrap_or(DEFAULT_API_BASE);
        let api_base = Url::parse(raw_base).map_err(|e| ConfigError::InvalidApiBase {
            url: raw_base.to_string(),
            reason: e.to_string(),
        })?;
        if api_base.cannot_be_a_base() || !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidApiBase {
                url: raw_base.to_string(),
                reason: "expected an http(s) URL".to_string(),
            });
        }

        Ok(Self {
            access_key,
            api_base,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = clamp_page_size(page_size);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Whether the API base points at this machine
    pub fn is_loopback(&self) -> bool {
        match self.api_base.host() {
            Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
            Some(Host::Ipv4(ip)) => ip.is_loopback(),
            Some(Host::Ipv6(ip)) => ip.is_loopback(),
            None => false,
        }
    }

    /// Full URL of the photo search endpoint
    pub fn search_endpoint(&self) -> Url {
        let mut url = self.api_base.clone();
        let path = format!("{}/search/photos", url.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }
}

/// Clamp a requested page size into what the API accepts
pub fn clamp_page_size(page_size: u32) -> u32 {
    page_size.clamp(1, MAX_PAGE_SIZE)
}
