use thiserror::Error;

/// Errors raised by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A keyword argument did not name any known variant.
    #[error("invalid {param}: {value:?}")]
    InvalidArgument { param: &'static str, value: String },
}

impl Error {
    pub(crate) fn invalid(param: &'static str, value: &str) -> Self {
        Error::InvalidArgument { param, value: value.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
