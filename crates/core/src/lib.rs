//! Core domain types, content normalization, slide planning, and the
//! pipeline driver for webpage-to-deck conversion.

pub mod config;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod plan;
pub mod service;
pub mod sink;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use normalize::ContentNormalizer;
pub use pipeline::{run, PipelineOptions, RunSummary};
pub use plan::{Grouping, SlidePlanner};
pub use service::{PageScraper, SlideHost};
pub use types::{
    ContentBlock, PageContent, ScrapedImage, ScrapedPage, ScrapedSection, SlideContent,
};
