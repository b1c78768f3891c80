//! `llt serve` — run the tile server.

use anyhow::Context;
use clap::Args;
use lex_config::LexConfig;
use lex_infer::RuleConjugator;
use lex_store::{ExclusionFile, PendingQueue};
use lex_tiles::{TileBuilder, TileServer};
use lex_wiki::WikiClient;

use super::wiki_options;

#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub async fn handle(args: ServeArgs, config: &LexConfig) -> anyhow::Result<()> {
    let client = WikiClient::new(wiki_options(&config.wiki));
    let exclusions = ExclusionFile::load(&config.store.exclusion_file)
        .context("failed to load the exclusion list")?;
    let queue = PendingQueue::load(&config.store.queue_file, &exclusions)
        .context("failed to load the pending queue")?;

    let builder = TileBuilder::new(
        client,
        RuleConjugator,
        exclusions,
        queue,
        config.wiki.language.clone(),
    );
    let server = TileServer::new(builder, config.server.max_tiles);
    let port = args.port.unwrap_or(config.server.port);

    server.serve(port).await.context("tile server failed")
}
