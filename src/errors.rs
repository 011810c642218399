use std::io;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CalcError {
    #[error("Invalid number.")]
    InvalidNumber(String),
    #[error("Invalid operation.")]
    InvalidOperation(String),
    #[error("Cannot divide by zero.")]
    DivisionByZero,
    #[error("Integer overflow.")]
    Overflow,
}

/// Failures of the interactive plumbing around the calculator.
///
/// Bad user input never shows up here: the reader and the session loop
/// report it on the output stream and keep going.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("end of input")]
    EndOfInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_messages() {
        let cases = vec![
            (CalcError::InvalidNumber("abc".to_string()), "Invalid number."),
            (CalcError::InvalidOperation("%".to_string()), "Invalid operation."),
            (CalcError::DivisionByZero, "Cannot divide by zero."),
            (CalcError::Overflow, "Integer overflow."),
        ];
        for (err, msg) in cases {
            assert_eq!(err.to_string(), msg)
        }
    }

    #[test]
    fn test_session_error_from_io() {
        let err: SessionError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, SessionError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
