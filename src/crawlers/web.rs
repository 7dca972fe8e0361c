use crate::config::CrawlerConfig;
use crate::crawlers::crawler::{BrowserSession, ReadyOutcome};
use crate::error::Result;
use crate::filter::{UrlFilter, is_in_scope, scope_host};
use crate::parsers::{TextExtractor, extract_links};
use crate::results::PageRecord;
use crate::utils::write_debug_artifact;
use futures::FutureExt;
use std::collections::HashSet;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Per-page timing and limits for a crawl
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// Maximum number of link hops from a seed
    pub max_depth: usize,
    /// Upper bound on the content-ready wait
    pub ready_timeout: Duration,
    /// Fixed delay after the ready wait, before the page is read
    pub settle_delay: Duration,
    /// Where to save markup of pages without text; `None` disables it
    pub debug_dir: Option<PathBuf>,
}

impl From<&CrawlerConfig> for CrawlSettings {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            ready_timeout: config.ready_timeout(),
            settle_delay: config.crawl_delay(),
            debug_dir: config
                .debug_artifacts
                .then(|| config.debug_dir.clone()),
        }
    }
}

/// A URL waiting to be crawled at a given depth
#[derive(Debug)]
struct CrawlTask {
    url: String,
    depth: usize,
}

/// Owns the state of one multi-seed crawl: the visited set shared by all
/// seeds and the pages collected so far, in crawl order.
pub struct CrawlController {
    settings: CrawlSettings,
    filter: UrlFilter,
    extractor: TextExtractor,
    visited: HashSet<String>,
    corpus: Vec<PageRecord>,
    navigations: usize,
    failures: usize,
}

impl CrawlController {
    /// Create a controller from the crawler configuration
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self::with_parts(
            CrawlSettings::from(config),
            UrlFilter::new(&config.filter)?,
            TextExtractor::new(&config.extraction),
        ))
    }

    pub fn with_parts(settings: CrawlSettings, filter: UrlFilter, extractor: TextExtractor) -> Self {
        Self {
            settings,
            filter,
            extractor,
            visited: HashSet::new(),
            corpus: Vec::new(),
            navigations: 0,
            failures: 0,
        }
    }

    /// Crawls every seed in order, each scoped to its own host
    pub async fn crawl_seeds<S: BrowserSession>(&mut self, session: &mut S, seeds: &[String]) {
        for seed in seeds {
            let seed_url = match Url::parse(seed) {
                Ok(url) => self.filter.normalize_url(&url),
                Err(e) => {
                    ::log::warn!("Skipping invalid seed URL {}: {}", seed, e);
                    continue;
                }
            };
            let Some(scope) = scope_host(&seed_url) else {
                ::log::warn!("Skipping seed URL without a host: {}", seed);
                continue;
            };

            ::log::info!("--- Starting new crawl for base domain: {} ---", scope);
            self.crawl(session, seed_url.as_str(), &scope, 0).await;
        }
    }

    /// Crawls every seed on `session`, then closes it.
    ///
    /// The session is closed exactly once, also when the crawl panics; the
    /// panic resumes after the browser has been released.
    pub async fn crawl_and_close<S: BrowserSession>(&mut self, mut session: S, seeds: &[String]) {
        let outcome = AssertUnwindSafe(self.crawl_seeds(&mut session, seeds))
            .catch_unwind()
            .await;

        session.close().await;

        if let Err(panic) = outcome {
            ::log::error!("Crawl panicked; browser session was closed");
            std::panic::resume_unwind(panic);
        }
    }

    /// Depth-first crawl from `url`.
    ///
    /// Entries are pushed in reverse link order and checked when popped, so pages
    /// are visited exactly as a recursive walk would visit them.
    pub async fn crawl<S: BrowserSession>(
        &mut self,
        session: &mut S,
        url: &str,
        scope_host: &str,
        depth: usize,
    ) {
        let mut stack = vec![CrawlTask {
            url: url.to_string(),
            depth,
        }];

        while let Some(task) = stack.pop() {
            if task.depth > self.settings.max_depth || self.visited.contains(&task.url) {
                continue;
            }

            ::log::info!("Crawling (Depth {}): {}", task.depth, task.url);
            // Marked before the fetch so no other path can schedule it again
            self.visited.insert(task.url.clone());

            match self.visit(session, &task, scope_host).await {
                Ok(links) => {
                    stack.extend(links.into_iter().rev().map(|link| CrawlTask {
                        url: link,
                        depth: task.depth + 1,
                    }));
                }
                Err(e) => {
                    self.failures += 1;
                    ::log::error!("!! Failed to crawl {}: {}", task.url, e);
                }
            }
        }
    }

    /// Fetches, records, and expands a single page.
    ///
    /// Returns the links to follow next; empty at the maximum depth.
    async fn visit<S: BrowserSession>(
        &mut self,
        session: &mut S,
        task: &CrawlTask,
        scope_host: &str,
    ) -> Result<Vec<String>> {
        self.navigations += 1;
        session.navigate(&task.url).await?;

        let _ = session.dismiss_consent().await;
        if session.await_content_ready(self.settings.ready_timeout).await == ReadyOutcome::TimedOut
        {
            ::log::info!("-> Main content selector not found, continuing anyway.");
        }
        tokio::time::sleep(self.settings.settle_delay).await;

        let final_url = session.current_url().await?;
        if final_url != task.url {
            let same_scope = Url::parse(&final_url).is_ok_and(|u| is_in_scope(&u, scope_host));
            if same_scope {
                ::log::info!("-> Redirected to: {}", final_url);
                self.visited.insert(final_url.clone());
            }
        }

        let html = session.page_source().await?;
        let text = self.extractor.extract(&html, &final_url);
        if text.is_empty() {
            ::log::info!("-> No content extracted from: {}", final_url);
            if let Some(dir) = &self.settings.debug_dir {
                if let Some(path) = write_debug_artifact(dir, &final_url, &html) {
                    ::log::info!("-> Saved debug HTML to {}", path.display());
                }
            }
        } else {
            self.corpus.push(PageRecord::new(final_url.clone(), text));
        }

        if task.depth >= self.settings.max_depth {
            return Ok(Vec::new());
        }

        let links = extract_links(&html, &final_url, scope_host, &self.filter);
        ::log::info!("--> Found {} valid links on page.", links.len());
        Ok(links.into_iter().collect())
    }

    /// Pages collected so far, in crawl order
    pub fn corpus(&self) -> &[PageRecord] {
        &self.corpus
    }

    pub fn into_corpus(self) -> Vec<PageRecord> {
        self.corpus
    }

    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    /// Number of navigations issued
    pub fn pages_visited(&self) -> usize {
        self.navigations
    }

    /// Number of pages abandoned because of a browser failure
    pub fn pages_failed(&self) -> usize {
        self.failures
    }
}
