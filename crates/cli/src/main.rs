//! CLI tool for turning a web page into a presentation.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use deck_alai::AlaiClient;
use deck_core::{Config, ContentNormalizer, Grouping, PipelineOptions, SlidePlanner};
use deck_scrape::FirecrawlClient;
use std::path::PathBuf;

/// Turn a web page into a presentation via the Firecrawl and Alai APIs.
#[derive(Parser, Debug)]
#[command(name = "web2deck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the page to convert
    url: String,

    /// Path for the normalized-content snapshot (overwritten each run)
    #[arg(short, long, default_value = "data.json")]
    output: PathBuf,

    /// How content blocks are grouped into slides
    #[arg(short, long, value_enum, default_value_t = GroupingArg::PerBlock)]
    grouping: GroupingArg,

    /// Maximum body lines per slide (per-section grouping)
    #[arg(long, default_value = "5")]
    max_body_lines: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GroupingArg {
    /// One slide per content block
    PerBlock,
    /// One slide per heading-delimited section
    PerSection,
}

impl From<GroupingArg> for Grouping {
    fn from(arg: GroupingArg) -> Self {
        match arg {
            GroupingArg::PerBlock => Grouping::PerBlock,
            GroupingArg::PerSection => Grouping::PerSection,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    // Pick up a local .env if present, then fail fast on missing
    // configuration before any network call.
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    log::debug!("Snapshot path: {}", args.output.display());

    let scraper = FirecrawlClient::new(config.firecrawl_api_key.as_str());
    let mut host = AlaiClient::new(config.alai_api_key.as_str());

    let options = PipelineOptions {
        snapshot_path: args.output.clone(),
        normalizer: ContentNormalizer::new(),
        planner: SlidePlanner::new()
            .with_grouping(args.grouping.into())
            .with_max_body_lines(args.max_body_lines),
    };

    let summary = deck_core::run(&scraper, &mut host, &config, &args.url, &options)?;

    println!(
        "Created {:?} with {} slide(s)",
        summary.title, summary.slide_count
    );
    println!("Shareable link: {}", summary.share_link);

    Ok(())
}
