//! Error taxonomy for drop table parsing and reconciliation

use std::path::PathBuf;

/// Errors from parsing, folding, or reconciling drop tables
#[derive(thiserror::Error, Debug)]
pub enum DropTableError {
    /// Malformed row shape or invalid rank token
    #[error("Parse error at {location}: {message}")]
    Parse { location: String, message: String },

    /// Data that parses but contradicts itself or a side file
    #[error("Consistency error at {location}: {message}")]
    Consistency { location: String, message: String },

    /// An enemy ended the parse with an entry count folding cannot handle
    #[error("Cannot fold {count} drop entries for enemy '{enemy}' in {source_name}")]
    Fold {
        enemy: String,
        source_name: String,
        count: usize,
    },

    /// Two versions disagree in a way no reconciliation rule or override covers
    #[error("Unhandled version difference for '{item}' in game {game}")]
    UnhandledCase { game: String, item: String },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Invalid game definition: {0}")]
    Config(String),
}

impl DropTableError {
    pub(crate) fn parse(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            location: location.into(),
            message: message.into(),
        }
    }

    pub(crate) fn consistency(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Consistency {
            location: location.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether a batch caller may skip the offending item and keep going.
    ///
    /// Data-validation failures are scoped to one item or row. Fold failures
    /// and I/O failures mean the table itself is unusable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::Consistency { .. } | Self::UnhandledCase { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DropTableError>;
