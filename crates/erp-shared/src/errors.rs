use thiserror::Error;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
    #[error("Maximum length exceeded. {max} allowed but found {actual}")]
    MaxExceeded { max: usize, actual: usize },
    #[error("Unknown identifier: {0:?}")]
    UnknownIdentifier(String),
}

#[derive(Debug, Error)]
#[error("The user has not logged in")]
pub struct NotLoggedInError;
