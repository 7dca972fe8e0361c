pub mod crawler;
pub mod web;
pub mod webdriver;


pub use crawler::{BrowserSession, ConsentOutcome, ReadyOutcome};
pub use web::{CrawlController, CrawlSettings};
pub use webdriver::WebDriverSession;
