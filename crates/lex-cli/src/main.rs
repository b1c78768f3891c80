use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("llt error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = match &cli.config {
        Some(path) => lex_config::LexConfig::load_from(path)?,
        None => lex_config::LexConfig::load_with_dotenv()?,
    };

    match cli.command {
        cli::Commands::Crawl(args) => commands::crawl::handle(args, &config).await,
        cli::Commands::Serve(args) => commands::serve::handle(args, &config).await,
        cli::Commands::Infer(args) => commands::infer::handle(args, &config).await,
    }
}

/// Diagnostics go to stderr; stdout is reserved for the record stream.
fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LEXLIFT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
