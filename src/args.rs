use clap::Parser;
use corpus_crawler::Crawl;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "corpus-crawler")]
#[command(about = "Crawls seed sites in a headless browser and writes their text to a corpus file")]
#[command(version)]
pub struct Args {
    /// Path to a JSON crawler configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed URL to crawl (repeatable; replaces the configured seeds)
    #[arg(short, long = "seed")]
    pub seeds: Vec<String>,

    /// Maximum link depth from each seed
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Delay in seconds after each page load
    #[arg(long)]
    pub delay: Option<u64>,

    /// Output file for the corpus
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// WebDriver endpoint (WEBDRIVER_URL takes precedence)
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Do not save the markup of pages that yield no text
    #[arg(long)]
    pub no_debug_artifacts: bool,
}

impl Args {
    /// Applies the command-line overrides on top of a builder
    pub fn apply(self, mut crawl: Crawl) -> Crawl {
        if !self.seeds.is_empty() {
            crawl = crawl.with_seeds(self.seeds);
        }
        if let Some(depth) = self.depth {
            crawl = crawl.with_max_depth(depth);
        }
        if let Some(delay) = self.delay {
            crawl = crawl.with_crawl_delay(delay);
        }
        if let Some(output) = self.output {
            crawl = crawl.with_output(output);
        }
        if let Some(url) = self.webdriver_url {
            crawl = crawl.with_webdriver_url(url);
        }
        if self.no_debug_artifacts {
            crawl = crawl.with_debug_artifacts(false);
        }
        crawl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_untouched() {
        let args = Args::parse_from(["corpus-crawler"]);
        let crawl = args.apply(Crawl::default());

        assert_eq!(crawl.config().max_depth, 3);
        assert_eq!(crawl.config().seed_urls.len(), 2);
        assert!(crawl.config().debug_artifacts);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "corpus-crawler",
            "--seed",
            "https://example.com/",
            "--seed",
            "https://example.org/",
            "--depth",
            "1",
            "--delay",
            "0",
            "--output",
            "out/corpus.txt",
            "--webdriver-url",
            "http://localhost:9515",
            "--no-debug-artifacts",
        ]);
        let crawl = args.apply(Crawl::default());
        let config = crawl.config();

        assert_eq!(
            config.seed_urls,
            vec!["https://example.com/", "https://example.org/"]
        );
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.crawl_delay_secs, 0);
        assert_eq!(config.output_path, PathBuf::from("out/corpus.txt"));
        assert_eq!(config.browser.webdriver_url, "http://localhost:9515");
        assert!(!config.debug_artifacts);
    }
}
