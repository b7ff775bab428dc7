//! Trait seams for the two external services.
//!
//! Each trait has exactly one production implementation (`deck-scrape`,
//! `deck-alai`); the pipeline is written against the traits so the
//! orchestration logic can be exercised with in-process doubles.

use crate::error::Result;
use crate::types::{ScrapedPage, SlideContent};

/// Client for the external scraping service.
pub trait PageScraper {
    /// Fetch and extract structured content for one URL. Single attempt.
    fn scrape(&self, url: &str) -> Result<ScrapedPage>;
}

/// Client for the external presentation service.
///
/// Call order is `authenticate`, `create_presentation`, then `add_slide`
/// once per planned slide in plan order, then optionally `share_link`.
pub trait SlideHost {
    /// Authenticate and establish a session for subsequent calls.
    fn authenticate(&mut self, email: &str, password: &str) -> Result<()>;

    /// Create an empty presentation; returns the presentation id.
    fn create_presentation(&mut self, title: &str) -> Result<String>;

    /// Append one slide. `order` is the 1-based slide position.
    fn add_slide(&mut self, presentation_id: &str, order: usize, slide: &SlideContent)
        -> Result<()>;

    /// Produce a shareable viewer link for the presentation.
    fn share_link(&mut self, presentation_id: &str) -> Result<String>;
}
