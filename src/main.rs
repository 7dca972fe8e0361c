use clap::Parser;
use corpus_crawler::Crawl;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let crawl = match &args.config {
        Some(path) => match Crawl::from_config_file(path) {
            Ok(crawl) => crawl,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Crawl::default(),
    };
    let crawl = args.apply(crawl);

    println!("Note: crawling requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using {}",
        crawl.config().browser.webdriver_url
    );

    let start_time = std::time::Instant::now();
    match crawl.run().await {
        Ok(summary) => {
            ::log::info!(
                "Visited {} pages ({} failed) in {:.2} seconds",
                summary.pages_visited,
                summary.pages_failed,
                start_time.elapsed().as_secs_f64()
            );
            println!("Done.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Crawl aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
