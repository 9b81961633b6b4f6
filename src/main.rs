use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use polarity::cli;
use polarity::config::ServerConfig;
use polarity::server;
use polarity::{Lexicon, SentimentIntensityAnalyzer};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::parse_args();
    init_tracing(cli.verbose);

    let lexicon = match &cli.lexicon {
        Some(path) => Lexicon::from_path(path)
            .with_context(|| format!("loading lexicon from {}", path.display()))?,
        None => Lexicon::embedded().context("loading embedded lexicon")?,
    };
    tracing::info!(entries = lexicon.len(), "lexicon loaded");

    let analyzer = SentimentIntensityAnalyzer::with_lexicon(lexicon);
    let config = ServerConfig::from(&cli);

    server::serve(&config, analyzer).await
}

/// `RUST_LOG` wins when set; otherwise the -v flags pick the level.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("polarity={default_level},tower_http=info")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
