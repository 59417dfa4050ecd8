use crate::crawlers::PageFetcher;
use crate::error::ScanError;
use crate::filter::{is_valid_url, parse_targets};
use crate::parsers::extract_disclosure_links;
use crate::report::Reporter;
use crate::results::{PageOutcome, ScanSummary, Target};
use std::io::{ErrorKind, Write};
use std::path::Path;
use std::time::Duration;

/// Read the input file and return its targets in order.
///
/// A missing file is reported separately from other read failures (permissions,
/// invalid UTF-8).
pub fn read_targets(path: &Path) -> Result<Vec<Target>, ScanError> {
    let contents = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ScanError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ScanError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let targets = parse_targets(&contents);
    ::log::debug!("Read {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

/// Sequential batch driver: validate, fetch and scan one target at a time
pub struct Scanner<F> {
    fetcher: F,
    delay: Duration,
}

impl<F: PageFetcher> Scanner<F> {
    /// Create a scanner with the default one second pause between fetched pages
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            delay: Duration::from_secs(1),
        }
    }

    /// Set the pause after each fetched and scanned page
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fetch a page and extract its disclosure links. Fetch failures become part of
    /// the outcome; they never abort the caller.
    pub async fn scan_page(&self, url: &str) -> PageOutcome {
        match self.fetcher.fetch_page(url).await {
            Ok(html) => PageOutcome::Links {
                links: extract_disclosure_links(&html, url),
            },
            Err(e) => {
                ::log::warn!("Fetch failed for {}: {}", e.url(), e);
                PageOutcome::FetchFailed {
                    error: e.to_string(),
                }
            }
        }
    }

    /// Process every target in the file at `path`, writing the report as it goes.
    ///
    /// Only file errors and report write failures end the run early.
    pub async fn run<W: Write>(
        &self,
        path: &Path,
        reporter: &mut Reporter<W>,
    ) -> Result<ScanSummary, ScanError> {
        reporter.header()?;

        let targets = read_targets(path)?;
        reporter.start(targets.len(), path)?;

        let mut summary = ScanSummary::default();
        for target in &targets {
            if !is_valid_url(&target.url) {
                ::log::info!("Line {}: skipping invalid URL {}", target.line, target.url);
                let outcome = PageOutcome::Invalid;
                reporter.outcome(target, &outcome)?;
                summary.record(&outcome);
                continue;
            }

            reporter.checking(target)?;
            let outcome = self.scan_page(&target.url).await;
            reporter.outcome(target, &outcome)?;
            summary.record(&outcome);

            if matches!(outcome, PageOutcome::Links { .. }) && !self.delay.is_zero() {
                ::log::trace!("Sleeping {:?} before the next target", self.delay);
                tokio::time::sleep(self.delay).await;
            }
        }

        reporter.footer()?;
        ::log::info!(
            "Scan complete - {} targets, {} invalid, {} failed, {} links on {} pages",
            summary.processed,
            summary.invalid,
            summary.failed,
            summary.links_found,
            summary.pages_with_links
        );
        Ok(summary)
    }
}
