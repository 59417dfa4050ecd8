use crate::config::FinderConfig;
use crate::crawlers::PageFetcher;
use crate::error::FetchError;
use reqwest::Client;

/// Fetches pages over HTTP(S) with a browser User-Agent and a hard timeout
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    /// Build a fetcher from the given settings.
    ///
    /// Idle connections are not pooled, so nothing is held open between pages.
    pub fn new(config: &FinderConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0)
            .build()?;

        ::log::debug!(
            "HTTP client ready (timeout {}s, user agent {:?})",
            config.timeout_secs,
            config.user_agent
        );
        Ok(Self { client })
    }
}

impl PageFetcher for WebFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        let started = std::time::Instant::now();
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

        ::log::debug!(
            "Fetched {} ({} bytes, HTTP {}) in {:.2} seconds",
            url,
            body.len(),
            status.as_u16(),
            started.elapsed().as_secs_f64()
        );
        Ok(body)
    }
}
