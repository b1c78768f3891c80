//! `llt infer` — run the engine on one lemma and print the record line.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use lex_config::LexConfig;
use lex_infer::{extract_conjugations, infer_forms};
use lex_wiki::WikiClient;

use super::wiki_options;

#[derive(Debug, Args)]
pub struct InferArgs {
    /// The lemma to derive forms for
    pub lemma: String,

    /// Read entry wikitext from a file instead of fetching the live entry
    #[arg(long)]
    pub wikitext: Option<PathBuf>,
}

pub async fn handle(args: InferArgs, config: &LexConfig) -> anyhow::Result<()> {
    let wikitext = match &args.wikitext {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            WikiClient::new(wiki_options(&config.wiki))
                .entry_wikitext(&args.lemma)
                .await?
        }
    };

    let templates = extract_conjugations(&wikitext);
    let forms = infer_forms(&args.lemma, &templates)
        .with_context(|| format!("cannot infer forms for '{}'", args.lemma))?;
    println!("{}", forms.to_record());
    Ok(())
}
