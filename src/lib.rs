pub mod config;
pub mod crawlers;
pub mod error;
pub mod filter;
pub mod parsers;
pub mod report;
pub mod results;
pub mod scanner;

// Re-export commonly used types for convenience
pub use config::FinderConfig;
pub use crawlers::{PageFetcher, WebFetcher};
pub use error::{FetchError, ScanError};
pub use filter::is_valid_url;
pub use parsers::extract_disclosure_links;
pub use results::{DisclosureLink, PageOutcome, ScanSummary, Target};
pub use scanner::Scanner;

use report::{ReportFormat, Reporter};
use std::io::Write;
use std::path::Path;

/// Fetch a single page and return its disclosure links
pub async fn find_impressum_links(
    config: &FinderConfig,
    url: &str,
) -> Result<Vec<DisclosureLink>, FetchError> {
    let fetcher = WebFetcher::new(config).map_err(|source| FetchError::Request {
        url: url.to_string(),
        source,
    })?;
    let html = fetcher.fetch_page(url).await?;
    Ok(extract_disclosure_links(&html, url))
}

/// Scan every URL listed in the file at `path` over the network, writing the report
/// to `out` in the format chosen by `config`.
pub async fn scan_file<W: Write>(
    config: &FinderConfig,
    path: impl AsRef<Path>,
    out: W,
) -> Result<ScanSummary, ScanError> {
    let fetcher = WebFetcher::new(config).map_err(ScanError::Client)?;
    let scanner = Scanner::new(fetcher).with_delay(config.delay());

    let format = if config.json_output {
        ReportFormat::JsonLines
    } else {
        ReportFormat::Text
    };
    let mut reporter = Reporter::new(out, format);

    scanner.run(path.as_ref(), &mut reporter).await
}
