use thiserror::Error;

/// Contract violations raised by the list engine.
///
/// Out of range pages and empty collections are not errors, they produce
/// empty pages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ListError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument(reason.into())
    }
}
