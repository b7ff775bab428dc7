//! Blocking client for the Firecrawl extract API.

use deck_core::{Error, PageScraper, Result, ScrapedPage, ScrapedSection};
use serde::Deserialize;
use serde_json::json;
use std::thread;
use std::time::Duration;

/// Production extract endpoint base.
const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";

/// Per-request timeout.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay between job status polls.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Poll budget before giving up on a job.
const DEFAULT_MAX_POLLS: u32 = 60;

/// Instructions sent alongside the extract schema.
const EXTRACT_PROMPT: &str = "\
Parse the page and return a single JSON object with two keys: `title` and `sections`.

1. Set `title` to the page title.
2. Build `sections` as an array, ordered exactly as the content appears on the page.
   Each entry has:
   - `heading`: the section heading, or null for leading content without one.
   - `paragraphs`: the relevant paragraph texts under that heading, in order.
   - `images`: objects with `url` (absolute, publicly accessible) and optional `alt`.
     Use an empty array when a section has no images; never include empty strings.
Include an introduction section first when the page has leading content.";

/// JSON Schema describing the shape we ask the service to return.
///
/// Sections are an ordered array on purpose: a keyed map would lose document
/// order in transit.
fn extract_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "required": ["title", "sections"],
        "properties": {
            "title": { "type": "string" },
            "sections": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["paragraphs", "images"],
                    "properties": {
                        "heading": { "type": ["string", "null"] },
                        "paragraphs": {
                            "type": "array",
                            "items": { "type": "string" }
                        },
                        "images": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["url"],
                                "properties": {
                                    "url": { "type": "string" },
                                    "alt": { "type": ["string", "null"] }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Response to the extract start request.
#[derive(Debug, Deserialize)]
struct StartResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Response to an extract status poll.
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    data: Option<ExtractData>,
    #[serde(default)]
    error: Option<String>,
}

/// The extracted payload once the job completes.
#[derive(Debug, Deserialize)]
struct ExtractData {
    #[serde(default)]
    title: String,
    #[serde(default)]
    sections: Vec<ScrapedSection>,
}

impl ExtractData {
    fn into_page(self, url: &str) -> ScrapedPage {
        ScrapedPage {
            url: url.to_string(),
            title: self.title,
            sections: self.sections,
        }
    }
}

/// Blocking Firecrawl extract client.
pub struct FirecrawlClient {
    http: reqwest::blocking::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl FirecrawlClient {
    /// Create a client against the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_polls: DEFAULT_MAX_POLLS,
        }
    }

    /// Override the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the job polling cadence.
    pub fn with_polling(mut self, interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = interval;
        self.max_polls = max_polls.max(1);
        self
    }

    /// Kick off an extract job for the URL; returns the job id.
    fn start_extract(&self, url: &str) -> Result<String> {
        let body = json!({
            "urls": [url],
            "prompt": EXTRACT_PROMPT,
            "schema": extract_schema(),
        });

        let response = self
            .http
            .post(format!("{}/v1/extract", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| Error::Scrape(format!("extract request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(Error::Scrape(format!(
                "extract request returned {status}: {text}"
            )));
        }

        let start: StartResponse = response
            .json()
            .map_err(|e| Error::Scrape(format!("malformed extract response: {e}")))?;

        if !start.success {
            return Err(Error::Scrape(
                start
                    .error
                    .unwrap_or_else(|| "extract job was not accepted".into()),
            ));
        }

        start
            .id
            .ok_or_else(|| Error::Scrape("extract response carried no job id".into()))
    }

    /// Poll the job until it completes, fails, or the poll budget runs out.
    fn wait_for_extract(&self, job_id: &str) -> Result<ExtractData> {
        for attempt in 1..=self.max_polls {
            let response = self
                .http
                .get(format!("{}/v1/extract/{job_id}", self.base_url))
                .bearer_auth(&self.api_key)
                .send()
                .map_err(|e| Error::Scrape(format!("extract poll failed: {e}")))?;

            let status = response.status();
            if !status.is_success() {
                let text = response.text().unwrap_or_default();
                return Err(Error::Scrape(format!(
                    "extract poll returned {status}: {text}"
                )));
            }

            let poll: StatusResponse = response
                .json()
                .map_err(|e| Error::Scrape(format!("malformed extract status: {e}")))?;

            match poll.status.as_str() {
                "completed" => {
                    return poll.data.ok_or_else(|| {
                        Error::Scrape("completed extract job carried no data".into())
                    });
                }
                "failed" | "cancelled" => {
                    return Err(Error::Scrape(
                        poll.error
                            .unwrap_or_else(|| format!("extract job {}", poll.status)),
                    ));
                }
                other => {
                    log::debug!("Extract job {job_id} {other} (poll {attempt}/{})", self.max_polls);
                }
            }

            thread::sleep(self.poll_interval);
        }

        Err(Error::Scrape(format!(
            "extract job {job_id} did not complete within {} polls",
            self.max_polls
        )))
    }
}

impl PageScraper for FirecrawlClient {
    fn scrape(&self, url: &str) -> Result<ScrapedPage> {
        let job_id = self.start_extract(url)?;
        log::debug!("Extract job started: {job_id}");
        let data = self.wait_for_extract(&job_id)?;
        Ok(data.into_page(url))
    }
}
