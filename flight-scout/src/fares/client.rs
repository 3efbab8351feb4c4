//! Fare site HTTP client.
//!
//! Fetches the price-sorted, nonstop-only results page for a route and date
//! and extracts the cheapest displayed price.

use std::sync::Arc;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderName, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::SearchTriple;
use crate::planner::FareSource;

use super::error::FareError;
use super::parse::extract_cheapest_price;

/// Default base URL for the fare site.
pub const DEFAULT_BASE_URL: &str = "https://www.kayak.com.tr";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 4;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

const DEFAULT_ACCEPT_LANGUAGE: &str = "tr-TR,tr;q=0.9,en;q=0.8";

/// Configuration for the fare client.
///
/// Everything the client needs is passed in here; there is no process-wide
/// browser or session state.
#[derive(Debug, Clone)]
pub struct FareConfig {
    /// Base URL of the fare site
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Accept-Language header sent with every request
    pub accept_language: String,
    /// Additional headers sent with every request
    pub extra_headers: Vec<(String, String)>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FareConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            extra_headers: Vec::new(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 30,
        }
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the Accept-Language header.
    pub fn with_accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = value.into();
        self
    }

    /// Add a header sent with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for FareConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Fare site client.
///
/// Uses a semaphore to limit concurrent requests to the site.
#[derive(Debug, Clone)]
pub struct FareClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl FareClient {
    /// Create a new client with the given configuration.
    pub fn new(config: FareConfig) -> Result<Self, FareError> {
        let mut headers = HeaderMap::new();

        let accept_language =
            HeaderValue::from_str(&config.accept_language).map_err(|_| FareError::Api {
                status: 0,
                message: "Invalid Accept-Language header".to_string(),
            })?;
        headers.insert(ACCEPT_LANGUAGE, accept_language);

        for (name, value) in &config.extra_headers {
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| FareError::Api {
                status: 0,
                message: format!("Invalid header name: {name}"),
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| FareError::Api {
                status: 0,
                message: format!("Invalid value for header {name}"),
            })?;
            headers.insert(name, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Results page URL for a triple.
    pub fn results_url(&self, triple: &SearchTriple) -> String {
        format!(
            "{}/flights/{}-{}/{}/1students",
            self.base_url,
            triple.origin(),
            triple.destination(),
            triple.date().format("%Y-%m-%d"),
        )
    }

    /// Fetch the cheapest nonstop price for a triple.
    ///
    /// Returns `Ok(None)` when the page loads but shows no usable price.
    pub async fn fetch_cheapest_price(
        &self,
        triple: &SearchTriple,
    ) -> Result<Option<u32>, FareError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| FareError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = self.results_url(triple);
        debug!(%url, "Fetching fares");

        let response = self
            .http
            .get(&url)
            .query(&[("sort", "price_a"), ("fs", "stops=~0")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(FareError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FareError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FareError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;
        Ok(extract_cheapest_price(&body))
    }
}

impl FareSource for FareClient {
    async fn cheapest_price(&self, triple: &SearchTriple) -> Result<Option<u32>, FareError> {
        self.fetch_cheapest_price(triple).await
    }
}
