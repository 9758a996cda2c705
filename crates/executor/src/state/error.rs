use std::fmt;

/// Errors surfaced by the backing database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Backend(message) => {
                write!(f, "backend database error: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
