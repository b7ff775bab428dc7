//! Content normalization for scraped pages.
//!
//! Reshapes the raw scrape result into the ordered block sequence the slide
//! planner consumes. Drops empty paragraphs and non-http image URLs, collapses
//! whitespace, and preserves document order throughout.

use crate::types::{ContentBlock, PageContent, ScrapedPage};
use regex::Regex;
use std::sync::LazyLock;

/// Regex to collapse whitespace runs (including newlines) into one space.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Clean a text fragment: collapse whitespace and trim.
fn clean_text(text: &str) -> String {
    WHITESPACE_COLLAPSE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// True when the URL is something the presentation service can fetch.
fn is_fetchable_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Normalizer turning a [`ScrapedPage`] into ordered [`ContentBlock`]s.
#[derive(Debug, Clone)]
pub struct ContentNormalizer {
    /// Whether to emit a heading block for the page title itself.
    title_heading: bool,
}

impl Default for ContentNormalizer {
    fn default() -> Self {
        Self {
            title_heading: true,
        }
    }
}

impl ContentNormalizer {
    /// Create a normalizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the page title becomes the first heading block.
    pub fn with_title_heading(mut self, enabled: bool) -> Self {
        self.title_heading = enabled;
        self
    }

    /// Normalize a scraped page into page content.
    ///
    /// Block order follows document order: the page title first (when
    /// enabled), then per section its heading, its non-empty paragraphs, and
    /// its images. Image URLs that are not absolute http(s) URLs are dropped;
    /// everything else passes through untouched.
    pub fn normalize(&self, page: &ScrapedPage) -> PageContent {
        let title = clean_text(&page.title);
        let mut content = PageContent::new(page.url.clone(), title.clone());

        if self.title_heading && !title.is_empty() {
            content.push(ContentBlock::heading(title));
        }

        for section in &page.sections {
            if let Some(heading) = &section.heading {
                let heading = clean_text(heading);
                if !heading.is_empty() {
                    content.push(ContentBlock::heading(heading));
                }
            }

            for paragraph in &section.paragraphs {
                let paragraph = clean_text(paragraph);
                if !paragraph.is_empty() {
                    content.push(ContentBlock::paragraph(paragraph));
                }
            }

            for image in &section.images {
                let url = image.url.trim();
                if is_fetchable_url(url) {
                    content.push(ContentBlock::image(url, image.alt.clone()));
                } else {
                    log::debug!("Dropping non-http image URL: {url:?}");
                }
            }
        }

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScrapedImage, ScrapedSection};

    fn page_with_sections(sections: Vec<ScrapedSection>) -> ScrapedPage {
        let mut page = ScrapedPage::new("https://example.com/article", "Title");
        page.sections = sections;
        page
    }

    #[test]
    fn test_scenario_title_and_two_paragraphs() {
        // Scrape response {title: "Title", paragraphs: ["A", "B"], images: []}
        let page = page_with_sections(vec![ScrapedSection {
            heading: None,
            paragraphs: vec!["A".into(), "B".into()],
            images: vec![],
        }]);

        let content = ContentNormalizer::new().normalize(&page);

        assert_eq!(
            content.blocks,
            vec![
                ContentBlock::heading("Title"),
                ContentBlock::paragraph("A"),
                ContentBlock::paragraph("B"),
            ]
        );
    }

    #[test]
    fn test_order_preserved_across_sections() {
        let page = page_with_sections(vec![
            ScrapedSection {
                heading: Some("Intro".into()),
                paragraphs: vec!["first".into()],
                images: vec![ScrapedImage {
                    url: "https://example.com/i.png".into(),
                    alt: None,
                }],
            },
            ScrapedSection {
                heading: Some("Details".into()),
                paragraphs: vec!["second".into(), "third".into()],
                images: vec![],
            },
        ]);

        let content = ContentNormalizer::new().normalize(&page);

        assert_eq!(
            content.blocks,
            vec![
                ContentBlock::heading("Title"),
                ContentBlock::heading("Intro"),
                ContentBlock::paragraph("first"),
                ContentBlock::image("https://example.com/i.png", None),
                ContentBlock::heading("Details"),
                ContentBlock::paragraph("second"),
                ContentBlock::paragraph("third"),
            ]
        );
    }

    #[test]
    fn test_empty_paragraphs_dropped() {
        let page = page_with_sections(vec![ScrapedSection {
            heading: None,
            paragraphs: vec!["".into(), "   ".into(), "kept".into(), "\n\t".into()],
            images: vec![],
        }]);

        let content = ContentNormalizer::new().normalize(&page);

        assert_eq!(
            content.blocks,
            vec![
                ContentBlock::heading("Title"),
                ContentBlock::paragraph("kept"),
            ]
        );
    }

    #[test]
    fn test_whitespace_collapsed() {
        let page = page_with_sections(vec![ScrapedSection {
            heading: Some("  A \n heading ".into()),
            paragraphs: vec!["some\n\nbroken   text".into()],
            images: vec![],
        }]);

        let content = ContentNormalizer::new().normalize(&page);

        assert_eq!(
            content.blocks[1..],
            [
                ContentBlock::heading("A heading"),
                ContentBlock::paragraph("some broken text"),
            ]
        );
    }

    #[test]
    fn test_non_http_image_urls_dropped() {
        let page = page_with_sections(vec![ScrapedSection {
            heading: None,
            paragraphs: vec![],
            images: vec![
                ScrapedImage {
                    url: "data:image/png;base64,AAAA".into(),
                    alt: None,
                },
                ScrapedImage {
                    url: "/relative/path.png".into(),
                    alt: None,
                },
                ScrapedImage {
                    url: "https://example.com/ok.png".into(),
                    alt: Some("ok".into()),
                },
            ],
        }]);

        let content = ContentNormalizer::new().normalize(&page);

        assert_eq!(
            content.blocks,
            vec![
                ContentBlock::heading("Title"),
                ContentBlock::image("https://example.com/ok.png", Some("ok".into())),
            ]
        );
    }

    #[test]
    fn test_without_title_heading() {
        let page = page_with_sections(vec![ScrapedSection {
            heading: None,
            paragraphs: vec!["A".into()],
            images: vec![],
        }]);

        let content = ContentNormalizer::new()
            .with_title_heading(false)
            .normalize(&page);

        assert_eq!(content.blocks, vec![ContentBlock::paragraph("A")]);
        // Title still recorded on the page content itself.
        assert_eq!(content.title, "Title");
    }

    #[test]
    fn test_empty_page_yields_no_blocks() {
        let mut page = ScrapedPage::new("https://example.com", "");
        page.sections = vec![];

        let content = ContentNormalizer::new().normalize(&page);

        assert!(content.is_empty());
    }
}
