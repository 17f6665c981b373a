//! Client for the GNews API.
//!
//! Upstream bodies are returned verbatim. The upstream status code is recorded
//! on [`UpstreamReply`] but never turned into an error: a 401 or 429 from GNews
//! reaches the caller the same way a 200 does.

use std::sync::Arc;
use std::time::{Duration, Instant};
use bytes::Bytes;
use reqwest::{Client, ClientBuilder, StatusCode};
use url::Url;
use crate::config::Config;
use crate::error::{AppError, Result};

const TOP_HEADLINES_PATH: [&str; 3] = ["api", "v4", "top-headlines"];
const SEARCH_PATH: [&str; 3] = ["api", "v4", "search"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    /// Raw body bytes; no charset decoding or BOM stripping.
    pub body: Bytes,
}

#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    config: Arc<Config>,
}

impl NewsClient {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        // One pooled client per process, cloned cheaply into every request
        let http = ClientBuilder::new()
            .timeout(config.upstream_timeout)
            .connect_timeout(config.upstream_timeout.min(Duration::from_secs(5)))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn top_headlines_url(&self, category: &str) -> Result<Url> {
        self.build_url(&TOP_HEADLINES_PATH, ("topic", category))
    }

    pub fn search_url(&self, query: &str) -> Result<Url> {
        self.build_url(&SEARCH_PATH, ("q", query))
    }

    pub async fn fetch_by_category(&self, category: &str) -> Result<UpstreamReply> {
        let url = self.top_headlines_url(category)?;
        self.fetch(url).await
    }

    pub async fn fetch_by_search(&self, query: &str) -> Result<UpstreamReply> {
        let url = self.search_url(query)?;
        self.fetch(url).await
    }

    /// Appends `segments` to the configured base and sets the query pairs in
    /// the order GNews documents them: subject, token, lang, country.
    fn build_url(&self, segments: &[&str], subject: (&str, &str)) -> Result<Url> {
        let mut url = self.config.gnews_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidRequestUrl(format!("{} cannot be a base", url_origin(&self.config.gnews_base_url))))?
            .pop_if_empty()
            .extend(segments);

        url.query_pairs_mut()
            .clear()
            .append_pair(subject.0, subject.1)
            .append_pair("token", &self.config.gnews_api_key)
            .append_pair("lang", &self.config.lang)
            .append_pair("country", &self.config.country);

        Ok(url)
    }

    async fn fetch(&self, url: Url) -> Result<UpstreamReply> {
        let loggable = redacted(&url);
        tracing::debug!("GET {}", loggable);
        let start = Instant::now();

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            tracing::debug!("{} answered {} in {:?}", loggable, status, start.elapsed());
        } else {
            tracing::warn!(
                "{} answered {} in {:?}; relaying body unchanged",
                loggable,
                status,
                start.elapsed()
            );
        }

        Ok(UpstreamReply { status, body })
    }
}

fn url_origin(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Renders `url` with the `token` parameter masked.
pub fn redacted(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();

    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}
