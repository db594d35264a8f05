use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SequenceError>;

/// Exit code used for usage errors, same as clap's.
pub const EXIT_USAGE: i32 = 2;
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },

    #[error("cannot write {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: {reason}")]
    MalformedSequence { line: usize, reason: String },

    #[error("not a permutation: {reason}")]
    NotAPermutation { reason: String },
}

impl SequenceError {
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        SequenceError::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    pub fn write_failure(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SequenceError::WriteFailure {
            path: path.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            SequenceError::InvalidArgument { .. } => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_names_the_argument() {
        let err = SequenceError::invalid_argument("abc", "not a base-10 integer");
        assert_eq!(
            err.to_string(),
            "invalid argument `abc`: not a base-10 integer"
        );
        assert_eq!(err.exit_code(), EXIT_USAGE);
    }

    #[test]
    fn write_failure_reports_path_and_cause() {
        let source = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let err = SequenceError::write_failure("out/random_sequence.txt", source);
        let message = err.to_string();
        assert!(message.contains("out/random_sequence.txt"), "{message}");
        assert!(message.contains("permission denied"), "{message}");
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }
}
