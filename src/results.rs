use serde::{Deserialize, Serialize};

/// A link believed to point at an Impressum page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosureLink {
    /// Visible text of the anchor or text node that matched
    #[serde(rename = "text")]
    pub display_text: String,

    /// The href resolved against the page URL
    #[serde(rename = "url")]
    pub absolute_url: String,
}

impl DisclosureLink {
    pub fn new(display_text: impl Into<String>, absolute_url: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            absolute_url: absolute_url.into(),
        }
    }
}

/// One line of the input file that was not blank or a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// 1-based position among the kept lines
    pub line: usize,
    pub url: String,
}

impl Target {
    pub fn new(line: usize, url: impl Into<String>) -> Self {
        Self {
            line,
            url: url.into(),
        }
    }
}

/// What happened to a single target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    /// Not an absolute URL; never fetched
    Invalid,
    /// The fetch failed with the given cause
    FetchFailed { error: String },
    /// The page was fetched and scanned; the list may be empty
    Links { links: Vec<DisclosureLink> },
}

/// Report entry for one target, as written in JSON mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    #[serde(flatten)]
    pub target: Target,
    #[serde(flatten)]
    pub outcome: PageOutcome,
}

/// Totals over a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub processed: usize,
    pub invalid: usize,
    pub failed: usize,
    pub pages_with_links: usize,
    pub links_found: usize,
}

impl ScanSummary {
    /// Account for one finished target
    pub fn record(&mut self, outcome: &PageOutcome) {
        self.processed += 1;
        match outcome {
            PageOutcome::Invalid => self.invalid += 1,
            PageOutcome::FetchFailed { .. } => self.failed += 1,
            PageOutcome::Links { links } => {
                if !links.is_empty() {
                    self.pages_with_links += 1;
                }
                self.links_found += links.len();
            }
        }
    }
}
