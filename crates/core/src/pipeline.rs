//! The pipeline driver: scrape, normalize, snapshot, plan, publish.
//!
//! Strictly sequential; each stage consumes the whole output of the previous
//! one. Any stage failure aborts the run. A failure while appending slides
//! leaves a partially populated presentation behind in the external service;
//! the error names the failing slide so the user can see how far it got.

use crate::config::Config;
use crate::error::Result;
use crate::normalize::ContentNormalizer;
use crate::plan::SlidePlanner;
use crate::service::{PageScraper, SlideHost};
use crate::sink;
use std::path::PathBuf;

/// Knobs for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Where the normalized content snapshot is written.
    pub snapshot_path: PathBuf,

    /// Normalizer settings.
    pub normalizer: ContentNormalizer,

    /// Slide grouping policy.
    pub planner: SlidePlanner,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("data.json"),
            normalizer: ContentNormalizer::new(),
            planner: SlidePlanner::new(),
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Id of the created presentation.
    pub presentation_id: String,

    /// Shareable viewer link.
    pub share_link: String,

    /// Presentation title (the page title).
    pub title: String,

    /// Number of slides appended.
    pub slide_count: usize,
}

/// Run the full pipeline for one URL.
///
/// An empty page (zero blocks) still creates a presentation; it just gets no
/// slides. Snapshot write failures are logged and do not abort the run.
pub fn run<S, H>(
    scraper: &S,
    host: &mut H,
    config: &Config,
    url: &str,
    options: &PipelineOptions,
) -> Result<RunSummary>
where
    S: PageScraper + ?Sized,
    H: SlideHost + ?Sized,
{
    log::info!("Scraping {url}");
    let page = scraper.scrape(url)?;
    log::info!(
        "Extracted {} paragraphs and {} images from {:?}",
        page.paragraph_count(),
        page.image_count(),
        page.title
    );

    let content = options.normalizer.normalize(&page);

    if let Err(e) = sink::write_snapshot(&options.snapshot_path, &content) {
        log::warn!(
            "Could not write snapshot to {}: {e}",
            options.snapshot_path.display()
        );
    } else {
        log::debug!("Snapshot written to {}", options.snapshot_path.display());
    }

    let slides = options.planner.plan(&content);
    log::info!("Planned {} slide(s)", slides.len());

    host.authenticate(&config.alai_email, &config.alai_password)?;
    let presentation_id = host.create_presentation(&content.title)?;
    log::info!("Created presentation {presentation_id}");

    for (index, slide) in slides.iter().enumerate() {
        let order = index + 1;
        host.add_slide(&presentation_id, order, slide)?;
        log::debug!("Added slide {order}/{}", slides.len());
    }

    let share_link = host.share_link(&presentation_id)?;

    Ok(RunSummary {
        presentation_id,
        share_link,
        title: content.title,
        slide_count: slides.len(),
    })
}
