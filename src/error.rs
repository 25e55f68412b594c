use thiserror::Error;

/// Errors raised while building or evaluating placeholders.
///
/// A placeholder that simply does not accept a candidate is not an error;
/// it returns `Ok(false)`. An [`Error`] means the test itself is malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A constructor was given an argument it cannot work with, e.g. a plain
    /// value where a matcher was required.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Two values had to be ordered but have no natural ordering.
    #[error("comparison of {candidate} with {previous} failed")]
    Incomparable { candidate: String, previous: String },
}

impl Error {
    pub(crate) fn incomparable(candidate: &crate::Value, previous: &crate::Value) -> Self {
        Self::Incomparable {
            candidate: format!("{} {}", candidate.type_name(), candidate),
            previous: format!("{} {}", previous.type_name(), previous),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
