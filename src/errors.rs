//! Error types for lexicon loading.
//!
//! Scoring itself cannot fail: it is a pure function over sanitized
//! input. The only fallible operation in the library is building the
//! lexicon, which happens once at startup. A lexicon that fails to load
//! is fatal to the process; the server never serves traffic with a
//! partially loaded lexicon.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or parsing a sentiment lexicon.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read.
    #[error("failed to read lexicon file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A lexicon line did not match the `word<TAB>score` format.
    #[error("malformed lexicon entry at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl LexiconError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
