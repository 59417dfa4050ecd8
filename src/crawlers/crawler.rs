use crate::error::FetchError;

/// Retrieves the HTML of a single page.
///
/// One call is one best-effort attempt: no retries, no caching between calls.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// Fetch `url` and return the body as text
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}
