use crate::results::{PageOutcome, PageReport, Target};
use std::io::{self, Write};
use std::path::Path;

const TITLE: &str = "PageFetcher - Impressum Link Finder";

/// How scan results are written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human-readable progress report with banners
    Text,
    /// One JSON object per target, nothing else
    JsonLines,
}

/// Writes the scan report to any output, flushing after every entry so progress
/// shows up while slow fetches are still running.
pub struct Reporter<W: Write> {
    out: W,
    format: ReportFormat,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: ReportFormat) -> Self {
        Self { out, format }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self) -> io::Result<()> {
        if self.format == ReportFormat::Text {
            writeln!(self.out, "{}", TITLE)?;
            writeln!(self.out, "{}", "=".repeat(40))?;
        }
        self.out.flush()
    }

    pub fn start(&mut self, count: usize, path: &Path) -> io::Result<()> {
        if self.format == ReportFormat::Text {
            writeln!(self.out, "Processing {} URLs from {}", count, path.display())?;
            writeln!(self.out, "{}", "-".repeat(60))?;
        }
        self.out.flush()
    }

    /// Announce that a valid target is about to be fetched
    pub fn checking(&mut self, target: &Target) -> io::Result<()> {
        if self.format == ReportFormat::Text {
            writeln!(self.out)?;
            writeln!(self.out, "Line {}: Checking {}", target.line, target.url)?;
        }
        self.out.flush()
    }

    pub fn outcome(&mut self, target: &Target, outcome: &PageOutcome) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => self.write_text_outcome(target, outcome)?,
            ReportFormat::JsonLines => {
                let entry = PageReport {
                    target: target.clone(),
                    outcome: outcome.clone(),
                };
                serde_json::to_writer(&mut self.out, &entry)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()
    }

    pub fn footer(&mut self) -> io::Result<()> {
        if self.format == ReportFormat::Text {
            writeln!(self.out)?;
            writeln!(self.out, "{}", "=".repeat(40))?;
            writeln!(self.out, "Processing complete!")?;
        }
        self.out.flush()
    }

    fn write_text_outcome(&mut self, target: &Target, outcome: &PageOutcome) -> io::Result<()> {
        match outcome {
            PageOutcome::Invalid => {
                writeln!(self.out, "Line {}: Invalid URL - {}", target.line, target.url)
            }
            PageOutcome::FetchFailed { error } => {
                writeln!(self.out, "Error fetching {}: {}", target.url, error)
            }
            PageOutcome::Links { links } if links.is_empty() => {
                writeln!(self.out, "✗ No Impressum links found")
            }
            PageOutcome::Links { links } => {
                writeln!(self.out, "✓ Found {} Impressum link(s):", links.len())?;
                for (i, link) in links.iter().enumerate() {
                    writeln!(self.out, "  {}. Text: '{}'", i + 1, link.display_text)?;
                    writeln!(self.out, "     URL:  {}", link.absolute_url)?;
                }
                Ok(())
            }
        }
    }
}
