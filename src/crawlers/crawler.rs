use crate::error::Result;
use std::time::Duration;

/// Outcome of trying to click away a cookie/consent banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentOutcome {
    /// A matching control was found and clicked
    Dismissed,
    /// No banner was found, or it could not be clicked; not an error
    NotPresent,
}

/// Outcome of waiting for the main content of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOutcome {
    Ready,
    /// The landmark never appeared; the page is read anyway
    TimedOut,
}

/// A long-lived rendering browser session driven one command at a time.
///
/// Navigation and content reads can fail; consent dismissal and the
/// readiness wait are best-effort and report their outcome instead.
#[allow(async_fn_in_trait)]
pub trait BrowserSession {
    /// Load `url` in the session
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Click a control whose text contains "accept" or "agree", if any
    async fn dismiss_consent(&mut self) -> ConsentOutcome;

    /// Wait up to `timeout` for a main-content landmark
    async fn await_content_ready(&mut self, timeout: Duration) -> ReadyOutcome;

    /// The URL currently loaded, after any redirects
    async fn current_url(&mut self) -> Result<String>;

    /// The fully rendered markup of the current page
    async fn page_source(&mut self) -> Result<String>;

    /// Ends the session and releases the browser process; failures are logged
    async fn close(self);
}
