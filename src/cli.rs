//! Command-line interface.

use clap::Parser;

/// Lexicon and rule-based sentiment analysis service.
#[derive(Debug, Parser)]
#[command(name = "polarity", version, about)]
pub struct Cli {
    /// Port to listen on
    #[arg(long, env = "POLARITY_PORT", default_value_t = 5001)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "POLARITY_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Load a custom lexicon file instead of the embedded one
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<std::path::PathBuf>,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
