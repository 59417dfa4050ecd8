use clap::Parser;
use impressum_finder::ScanError;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Bad arguments print usage and exit non-zero
    let args = Args::parse();
    let config = args.to_config();

    ::log::info!("Scanning URLs listed in {}", args.pages_file.display());
    let start_time = std::time::Instant::now();

    let result = impressum_finder::scan_file(&config, &args.pages_file, std::io::stdout()).await;

    match result {
        Ok(summary) => {
            ::log::info!(
                "Processed {} URLs in {:.2} seconds",
                summary.processed,
                start_time.elapsed().as_secs_f64()
            );
            ExitCode::SUCCESS
        }
        Err(e @ ScanError::FileNotFound { .. }) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            ::log::error!("Scan aborted: {:?}", e);
            println!("Error processing file: {}", e);
            ExitCode::FAILURE
        }
    }
}
