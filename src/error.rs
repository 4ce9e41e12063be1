use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A prompt answer that does not parse as an integer.
    #[error("Invalid input. Please enter an integer.")]
    InvalidInteger { input: String },

    /// More nodes requested than there are distinct points in the boundary.
    #[error("Cannot place {node_count} unique nodes in a boundary that holds only {capacity}.")]
    Infeasible { node_count: i64, capacity: u128 },

    #[error("Unexpected end of input while waiting for {0}.")]
    EndOfInput(&'static str),

    #[error("Malformed node file at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Errors caused by what the user typed rather than by the environment.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Error::InvalidInteger { .. } | Error::Infeasible { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_integer_message() {
        let err = Error::InvalidInteger {
            input: "abc".into(),
        };
        assert_eq!(err.to_string(), "Invalid input. Please enter an integer.");
        assert!(err.is_user_input());
    }

    #[test]
    fn io_is_not_user_input() {
        let err = Error::from(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert!(!err.is_user_input());
    }
}
