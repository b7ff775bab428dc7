//! Firecrawl extract client backend for webpage-to-deck conversion.
//!
//! Talks to the Firecrawl `/v1/extract` API, which runs as a job: one start
//! request, then polling until the job completes or fails.

pub mod client;

pub use client::FirecrawlClient;
