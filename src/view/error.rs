use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("The view storage can't be locked.")]
    StorageUnavailable,
    #[error("The record `{0}` is not part of the current results.")]
    UnknownRecord(String),
}
