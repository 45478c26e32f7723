use crate::parser;

/// Crate Error type
///
/// The notation parser reports only that the input is invalid, never why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid dice notation")
    }
}

impl std::error::Error for Error {}

impl From<pest::error::Error<parser::Rule>> for Error {
    fn from(_: pest::error::Error<parser::Rule>) -> Self {
        Error
    }
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
