//! Error taxonomy shared by every mode of the drill.

use std::io;
use thiserror::Error;

/// All errors that can surface while loading, quizzing or playing.
#[derive(Debug, Error)]
pub enum DrillError {
    /// The requested id is not in the store.
    #[error("sentence {0} not found")]
    SentenceNotFound(u32),

    /// A flag value does not fit the grammar the mode expects.
    #[error("invalid argument for --{flag}: {value}")]
    InvalidArgument { flag: &'static str, value: String },

    /// The speech engine (or the requested voice) cannot be invoked.
    #[error("speech engine unavailable: {0}")]
    SpeechUnavailable(String),

    /// Whoever was reading our output went away.
    #[error("output closed")]
    BrokenOutput,

    /// The corpus could not be read or holds no sentence pairs.
    #[error("corpus error: {0}")]
    Corpus(String),

    #[error(transparent)]
    Io(io::Error),
}

impl From<io::Error> for DrillError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::BrokenPipe {
            DrillError::BrokenOutput
        } else {
            DrillError::Io(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broken_pipe_maps_to_broken_output() {
        let err: DrillError = io::Error::new(io::ErrorKind::BrokenPipe, "gone").into();
        assert!(matches!(err, DrillError::BrokenOutput));
    }

    #[test]
    fn test_other_io_errors_pass_through() {
        let err: DrillError = io::Error::new(io::ErrorKind::NotFound, "nope").into();
        assert!(matches!(err, DrillError::Io(_)));
    }
}
