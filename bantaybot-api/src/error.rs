use std::fmt;

/// Error surface of snapshot generation and view derivation.
///
/// Both operations are total over their configured ranges, so no variant
/// exists today. The `Result` plumbing stays in place so a real sensor
/// backend can slot in without changing any signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl std::error::Error for Error {}
