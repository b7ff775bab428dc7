//! Slide planning: mapping content blocks to slides.
//!
//! The grouping policy is configuration-defined, not hard-coded. `PerBlock`
//! derives one slide per block; `PerSection` batches each heading-delimited
//! run into one slide, with a configurable cap on body lines per slide.

use crate::types::{ContentBlock, PageContent, SlideContent};

/// How content blocks are grouped into slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    /// One slide per content block.
    #[default]
    PerBlock,
    /// One slide per heading-delimited run of blocks.
    PerSection,
}

/// Planner deriving the ordered slide list from page content.
#[derive(Debug, Clone)]
pub struct SlidePlanner {
    grouping: Grouping,
    /// Maximum body lines per slide under `PerSection`.
    max_body_lines: usize,
}

impl Default for SlidePlanner {
    fn default() -> Self {
        Self {
            grouping: Grouping::default(),
            max_body_lines: 5,
        }
    }
}

impl SlidePlanner {
    /// Create a planner with the default per-block grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grouping policy.
    pub fn with_grouping(mut self, grouping: Grouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Set the maximum body lines per slide (per-section grouping only).
    pub fn with_max_body_lines(mut self, max: usize) -> Self {
        self.max_body_lines = max.max(1); // at least 1 line per slide
        self
    }

    /// Plan slides from page content. Slide order follows block order; an
    /// empty page plans to zero slides.
    pub fn plan(&self, content: &PageContent) -> Vec<SlideContent> {
        match self.grouping {
            Grouping::PerBlock => self.plan_per_block(content),
            Grouping::PerSection => self.plan_per_section(content),
        }
    }

    fn plan_per_block(&self, content: &PageContent) -> Vec<SlideContent> {
        let mut slides = Vec::with_capacity(content.blocks.len());
        let mut current_title = content.title.clone();

        for block in &content.blocks {
            match block {
                ContentBlock::Heading { text } => {
                    current_title = text.clone();
                    slides.push(SlideContent::titled(text.clone()));
                }
                ContentBlock::Paragraph { text } => {
                    let mut slide = SlideContent::titled(current_title.clone());
                    slide.body.push(text.clone());
                    slides.push(slide);
                }
                ContentBlock::Image { url, .. } => {
                    let mut slide = SlideContent::titled(current_title.clone());
                    slide.image_urls.push(url.clone());
                    slides.push(slide);
                }
            }
        }

        slides
    }

    fn plan_per_section(&self, content: &PageContent) -> Vec<SlideContent> {
        let mut slides: Vec<SlideContent> = Vec::new();
        let mut current: Option<SlideContent> = None;

        for block in &content.blocks {
            match block {
                ContentBlock::Heading { text } => {
                    if let Some(slide) = current.take() {
                        slides.push(slide);
                    }
                    current = Some(SlideContent::titled(text.clone()));
                }
                ContentBlock::Paragraph { text } => {
                    let mut slide = current
                        .take()
                        .unwrap_or_else(|| SlideContent::titled(content.title.clone()));
                    if slide.body.len() >= self.max_body_lines {
                        // Overflow starts a continuation slide with the same title.
                        let title = slide.title.clone();
                        slides.push(slide);
                        slide = SlideContent::titled(title);
                    }
                    slide.body.push(text.clone());
                    current = Some(slide);
                }
                ContentBlock::Image { url, .. } => {
                    let mut slide = current
                        .take()
                        .unwrap_or_else(|| SlideContent::titled(content.title.clone()));
                    slide.image_urls.push(url.clone());
                    current = Some(slide);
                }
            }
        }

        if let Some(slide) = current {
            slides.push(slide);
        }

        slides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(blocks: Vec<ContentBlock>) -> PageContent {
        PageContent {
            url: "https://example.com/article".into(),
            title: "Title".into(),
            blocks,
        }
    }

    #[test]
    fn test_per_block_scenario_three_slides() {
        // [Heading("Title"), Paragraph("A"), Paragraph("B")] -> 3 slides in order.
        let content = content(vec![
            ContentBlock::heading("Title"),
            ContentBlock::paragraph("A"),
            ContentBlock::paragraph("B"),
        ]);

        let slides = SlidePlanner::new().plan(&content);

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].title, "Title");
        assert!(slides[0].body.is_empty());
        assert_eq!(slides[1].body, vec!["A"]);
        assert_eq!(slides[2].body, vec!["B"]);
    }

    #[test]
    fn test_per_block_paragraph_inherits_nearest_heading() {
        let content = content(vec![
            ContentBlock::heading("Title"),
            ContentBlock::heading("Intro"),
            ContentBlock::paragraph("A"),
            ContentBlock::image("https://x/i.png", None),
        ]);

        let slides = SlidePlanner::new().plan(&content);

        assert_eq!(slides.len(), 4);
        assert_eq!(slides[2].title, "Intro");
        assert_eq!(slides[3].title, "Intro");
        assert_eq!(slides[3].image_urls, vec!["https://x/i.png"]);
    }

    #[test]
    fn test_per_section_batches_blocks() {
        let content = content(vec![
            ContentBlock::heading("Intro"),
            ContentBlock::paragraph("A"),
            ContentBlock::paragraph("B"),
            ContentBlock::image("https://x/i.png", None),
            ContentBlock::heading("Details"),
            ContentBlock::paragraph("C"),
        ]);

        let slides = SlidePlanner::new()
            .with_grouping(Grouping::PerSection)
            .plan(&content);

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "Intro");
        assert_eq!(slides[0].body, vec!["A", "B"]);
        assert_eq!(slides[0].image_urls, vec!["https://x/i.png"]);
        assert_eq!(slides[1].title, "Details");
        assert_eq!(slides[1].body, vec!["C"]);
    }

    #[test]
    fn test_per_section_body_cap_starts_continuation() {
        let content = content(vec![
            ContentBlock::heading("Intro"),
            ContentBlock::paragraph("A"),
            ContentBlock::paragraph("B"),
            ContentBlock::paragraph("C"),
        ]);

        let slides = SlidePlanner::new()
            .with_grouping(Grouping::PerSection)
            .with_max_body_lines(2)
            .plan(&content);

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].body, vec!["A", "B"]);
        assert_eq!(slides[1].title, "Intro");
        assert_eq!(slides[1].body, vec!["C"]);
    }

    #[test]
    fn test_per_section_leading_paragraph_uses_page_title() {
        let content = content(vec![
            ContentBlock::paragraph("orphan"),
            ContentBlock::heading("Intro"),
            ContentBlock::paragraph("A"),
        ]);

        let slides = SlidePlanner::new()
            .with_grouping(Grouping::PerSection)
            .plan(&content);

        assert_eq!(slides.len(), 2);
        assert_eq!(slides[0].title, "Title");
        assert_eq!(slides[0].body, vec!["orphan"]);
    }

    #[test]
    fn test_zero_blocks_plans_zero_slides() {
        let content = content(vec![]);

        assert!(SlidePlanner::new().plan(&content).is_empty());
        assert!(SlidePlanner::new()
            .with_grouping(Grouping::PerSection)
            .plan(&content)
            .is_empty());
    }

    #[test]
    fn test_max_body_lines_floor_is_one() {
        let planner = SlidePlanner::new()
            .with_grouping(Grouping::PerSection)
            .with_max_body_lines(0);

        let content = content(vec![
            ContentBlock::heading("Intro"),
            ContentBlock::paragraph("A"),
            ContentBlock::paragraph("B"),
        ]);

        let slides = planner.plan(&content);
        assert_eq!(slides.len(), 2);
    }
}
