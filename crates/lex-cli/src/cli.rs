use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::crawl::CrawlArgs;
use crate::commands::infer::InferArgs;
use crate::commands::serve::ServeArgs;

/// Top-level CLI parser for the `llt` binary.
#[derive(Debug, Parser)]
#[command(
    name = "llt",
    version,
    about = "lexlift - import Wiktionary verbs into the lexeme database"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Explicit config file (skips the usual lookup chain)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Crawl the candidate listing and emit one record per new verb
    Crawl(CrawlArgs),
    /// Serve review tiles to the crowdsourcing platform
    Serve(ServeArgs),
    /// Infer the inflected forms of a single lemma
    Infer(InferArgs),
}
