//! Domain types for scraped page content and derived slides.

use serde::{Deserialize, Serialize};

/// Raw result returned by the scraping service, before normalization.
///
/// Sections preserve document order; the extract schema sent to the service
/// requests an ordered array rather than a keyed map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPage {
    /// The URL that was scraped.
    pub url: String,

    /// Page title.
    pub title: String,

    /// Body content, sectioned by heading, in document order.
    pub sections: Vec<ScrapedSection>,
}

impl ScrapedPage {
    /// Create an empty scraped page for the given URL and title.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            sections: Vec::new(),
        }
    }

    /// Total number of paragraphs across all sections.
    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(|s| s.paragraphs.len()).sum()
    }

    /// Total number of images across all sections.
    pub fn image_count(&self) -> usize {
        self.sections.iter().map(|s| s.images.len()).sum()
    }
}

/// One heading-delimited run of page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapedSection {
    /// Section heading, if the page had one.
    #[serde(default)]
    pub heading: Option<String>,

    /// Paragraph texts under this heading, in document order.
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Images that appeared in this section.
    #[serde(default)]
    pub images: Vec<ScrapedImage>,
}

/// An image reference from the scraped page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedImage {
    /// Absolute image URL.
    pub url: String,

    /// Alt text, when the page provided one.
    #[serde(default)]
    pub alt: Option<String>,
}

/// Normalized page content: what the debug sink persists and the slide
/// planner consumes. Created once per run; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    /// Source URL.
    pub url: String,

    /// Page title.
    pub title: String,

    /// Content blocks in document order. Order determines slide order.
    pub blocks: Vec<ContentBlock>,
}

impl PageContent {
    /// Create page content with no blocks.
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block, preserving insertion order.
    pub fn push(&mut self, block: ContentBlock) {
        self.blocks.push(block);
    }

    /// True when no blocks were produced for this page.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Smallest normalized unit of page content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A heading (the page title or a section heading).
    Heading { text: String },

    /// A body paragraph. Never empty after normalization.
    Paragraph { text: String },

    /// An image reference, passed through to the presentation service.
    Image { url: String, alt: Option<String> },
}

impl ContentBlock {
    /// Convenience constructor for a heading block.
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading { text: text.into() }
    }

    /// Convenience constructor for a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// Convenience constructor for an image block.
    pub fn image(url: impl Into<String>, alt: Option<String>) -> Self {
        Self::Image {
            url: url.into(),
            alt,
        }
    }
}

/// Content for a single slide, derived from one or more blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Slide title.
    pub title: String,

    /// Body lines (paragraph texts) for this slide.
    pub body: Vec<String>,

    /// Image URLs to place on this slide.
    pub image_urls: Vec<String>,
}

impl SlideContent {
    /// Create a slide with the given title and no body.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// The text the presentation service should build this slide from:
    /// title plus body lines, newline-joined.
    pub fn context_text(&self) -> String {
        let mut parts = Vec::with_capacity(1 + self.body.len());
        if !self.title.is_empty() {
            parts.push(self.title.as_str());
        }
        parts.extend(self.body.iter().map(|s| s.as_str()));
        parts.join("\n")
    }
}
