// Export modules for library usage
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod errors;
pub mod lexicon;
pub mod server;

// Re-export commonly used types
pub use crate::analyzer::{SentimentIntensityAnalyzer, SentimentScores};
pub use crate::config::ServerConfig;
pub use crate::errors::LexiconError;
pub use crate::lexicon::Lexicon;
pub use crate::server::router;
