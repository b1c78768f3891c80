//! `llt crawl` — run the crawl pipeline.

use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use lex_config::LexConfig;
use lex_crawl::Crawler;
use lex_store::ExclusionFile;
use lex_wiki::{CategoryListing, WikiClient};

use super::wiki_options;

#[derive(Debug, Args)]
pub struct CrawlArgs {
    /// Stop after this many listing pages (default: run to exhaustion)
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Write records here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Wiktionary category to crawl
    #[arg(long)]
    pub category: Option<String>,
}

pub async fn handle(args: CrawlArgs, config: &LexConfig) -> anyhow::Result<()> {
    let client = WikiClient::new(wiki_options(&config.wiki));
    let category = args
        .category
        .unwrap_or_else(|| config.crawl.category.clone());
    let listing = CategoryListing::new(client.clone(), category, config.crawl.page_size);
    let exclusions = ExclusionFile::load(&config.store.exclusion_file)
        .context("failed to load the exclusion list")?;
    let irregulars: HashSet<String> = config.crawl.irregulars.iter().cloned().collect();

    let mut crawler = Crawler::new(
        listing,
        client.clone(),
        client,
        exclusions,
        irregulars,
        config.wiki.language.clone(),
    )
    .with_max_pages(args.max_pages.or(config.crawl.max_pages));

    let report = match &args.output {
        Some(path) => {
            let mut out = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            crawler.run(&mut out).await?
        }
        None => crawler.run(&mut io::stdout().lock()).await?,
    };

    eprintln!(
        "crawled {} pages, {} candidates: {} accepted, {} rejected, {} skipped",
        report.pages, report.candidates, report.accepted, report.rejected, report.skipped
    );
    Ok(())
}
