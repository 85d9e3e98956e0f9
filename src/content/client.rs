//! HTTP client for the upstream content API.
//!
//! Two endpoints matter to routing: a scoped listing
//! (`GET /v1/content?country=&state=&city=&category=&page=`) and an exact
//! -location item lookup (`GET /v1/content/{slug}?...`). Not-found on the
//! item endpoint is data, not an error; every other non-2xx status is.

use crate::content::types::{ContentItem, ListingPage, Scope};
use crate::error::Error;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Seam over the content API so dispatch and the gateway can be tested
/// against stub sources.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch one page of the listing for a scope.
    async fn list(&self, scope: &Scope, page: u32) -> Result<ListingPage, Error>;

    /// Fetch a single item by exact location. `None` when the upstream
    /// answers 404.
    async fn item(&self, scope: &Scope, slug: &str) -> Result<Option<ContentItem>, Error>;
}

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// `reqwest`-backed content API client.
pub struct ContentClient {
    http: reqwest::Client,
    base: Url,
}

impl ContentClient {
    /// Build a client against a base URL, e.g. `https://api.example.com`.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Build a client with an explicit per-request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let base = Url::parse(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pagesense/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, base })
    }

    fn listing_url(&self, scope: &Scope, page: u32) -> Result<Url, Error> {
        let mut url = self.base.join("v1/content")?;
        let page_str = page.to_string();
        {
            let mut qs = url.query_pairs_mut();
            for (key, value) in scope.query_pairs() {
                qs.append_pair(key, value);
            }
            qs.append_pair("page", &page_str);
        }
        Ok(url)
    }

    fn item_url(&self, scope: &Scope, slug: &str) -> Result<Url, Error> {
        let mut url = self.base.join(&format!("v1/content/{slug}"))?;
        {
            let mut qs = url.query_pairs_mut();
            for (key, value) in scope.query_pairs() {
                qs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl ContentSource for ContentClient {
    async fn list(&self, scope: &Scope, page: u32) -> Result<ListingPage, Error> {
        let url = self.listing_url(scope, page)?;
        debug!(%url, "fetching listing");
        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(resp.json().await?)
    }

    async fn item(&self, scope: &Scope, slug: &str) -> Result<Option<ContentItem>, Error> {
        let url = self.item_url(scope, slug)?;
        debug!(%url, "fetching item");
        let resp = self.http.get(url.clone()).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(Some(resp.json().await?))
    }
}
