use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-wide errors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Error {
    /// An internal invariant was violated, e.g. a poisoned lock. These should
    /// never happen during normal operation.
    Internal(String),
    /// The caller supplied an invalid value, e.g. a malformed range bound.
    Value(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Internal(s) | Error::Value(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for Error {}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Error::Internal(err.to_string())
    }
}
