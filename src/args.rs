use clap::Parser;
use impressum_finder::FinderConfig;
use impressum_finder::config::BROWSER_USER_AGENT;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "impressum-finder")]
#[command(about = "Fetches a list of web pages and reports links to their Impressum")]
#[command(version)]
pub struct Args {
    /// File with one URL per line (blank lines and # comments are skipped)
    pub pages_file: PathBuf,

    /// Request timeout in seconds (connect + read)
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Pause in seconds after each fetched page
    #[arg(long, default_value_t = 1)]
    pub delay: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = BROWSER_USER_AGENT)]
    pub user_agent: String,

    /// Print one JSON object per URL instead of the text report
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Build the finder configuration from the command line
    pub fn to_config(&self) -> FinderConfig {
        FinderConfig::new()
            .with_timeout(self.timeout)
            .with_delay(self.delay)
            .with_user_agent(self.user_agent.as_str())
            .with_json_output(self.json)
    }
}
